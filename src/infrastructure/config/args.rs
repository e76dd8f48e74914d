use super::app_config::LogLevel;
use crate::domain::TodayClock;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "training-plan",
    version,
    about = "A terminal viewer for a rowing training schedule",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the training plan server.
    #[arg(short, long, value_name = "URL", env = "TRAINING_PLAN_SERVER_URL")]
    pub server_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Date column format (chrono syntax).
    #[arg(long, value_name = "FORMAT")]
    pub date_format: Option<String>,

    /// Clock used to decide which day is today.
    #[arg(long, value_enum)]
    pub today_clock: Option<TodayClock>,
}
