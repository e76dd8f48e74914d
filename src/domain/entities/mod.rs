//! Domain entity definitions.

mod training_session;

pub use training_session::{SessionId, TrainingSession};
