//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Training data HTTP client.
pub mod http;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager, ThemeConfig};
pub use http::TrainingDataClient;
