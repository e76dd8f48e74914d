//! Domain layer with core entities, view state and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// View state and render modes.
pub mod view_state;

pub use entities::{SessionId, TrainingSession};
pub use errors::ScheduleError;
pub use ports::TrainingDataPort;
pub use view_state::{MountDate, RenderMode, Schedule, TodayClock, ViewState};
