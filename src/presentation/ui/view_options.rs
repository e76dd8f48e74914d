//! Presentation settings derived from configuration.

use std::str::FromStr;

use ratatui::style::Color;
use tracing::warn;

use crate::domain::TodayClock;
use crate::domain::keybinding::Keymap;
use crate::infrastructure::AppConfig;

/// Settings shared by every mount of the schedule view.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub today_clock: TodayClock,
    pub date_format: String,
    pub accent: Color,
    pub today: Color,
    pub mouse: bool,
    pub keymap: Keymap,
}

impl ViewOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let (keymap, rejected) = Keymap::with_overrides(&config.keybindings);
        for spec in rejected {
            warn!(key = %spec, "Ignoring unrecognised keybinding");
        }

        Self {
            today_clock: config.today_clock,
            date_format: config.date_format.clone(),
            accent: parse_color(&config.theme.accent_color, Color::Cyan),
            today: parse_color(&config.theme.today_color, Color::Yellow),
            mouse: config.mouse,
            keymap,
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

fn parse_color(value: &str, fallback: Color) -> Color {
    Color::from_str(value.trim()).unwrap_or_else(|_| {
        warn!(color = %value, "Invalid color, using default");
        fallback
    })
}
