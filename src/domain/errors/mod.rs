//! Domain error types.

mod schedule_error;

pub use schedule_error::ScheduleError;
