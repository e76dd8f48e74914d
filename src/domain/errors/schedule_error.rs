//! Training schedule error types.

use thiserror::Error;

/// Errors raised while obtaining the training schedule.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ScheduleError {
    /// Transport failure, non-success status or undecodable body, collapsed
    /// into the one message the view displays.
    #[error("{message}")]
    FetchFailed { message: String },

    #[error("failed to set up training data client: {message}")]
    ClientSetup { message: String },
}

impl ScheduleError {
    /// Creates fetch failed error.
    #[must_use]
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    /// Creates client setup error.
    #[must_use]
    pub fn client_setup(message: impl Into<String>) -> Self {
        Self::ClientSetup {
            message: message.into(),
        }
    }
}
