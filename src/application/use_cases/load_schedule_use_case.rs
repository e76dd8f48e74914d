//! Load schedule use case implementation.

use std::sync::Arc;

use tracing::{debug, error, info, trace};

use crate::domain::entities::TrainingSession;
use crate::domain::errors::ScheduleError;
use crate::domain::ports::TrainingDataPort;

/// Performs the single schedule fetch of a mounted view.
#[derive(Clone)]
pub struct LoadScheduleUseCase {
    data_port: Arc<dyn TrainingDataPort>,
}

impl LoadScheduleUseCase {
    /// Creates new load schedule use case.
    #[must_use]
    pub const fn new(data_port: Arc<dyn TrainingDataPort>) -> Self {
        Self { data_port }
    }

    /// Fetches the schedule once.
    ///
    /// # Errors
    /// Returns the port's error unchanged; callers surface it as view state.
    pub async fn execute(&self) -> Result<Vec<TrainingSession>, ScheduleError> {
        debug!("Fetching training schedule");

        match self.data_port.fetch_sessions().await {
            Ok(sessions) => {
                info!(count = sessions.len(), "Training schedule loaded");
                for session in &sessions {
                    trace!(key = %session.display_key(), day = %session.day(), "Session received");
                }
                Ok(sessions)
            }
            Err(e) => {
                error!(error = %e, "Error fetching training data");
                Err(e)
            }
        }
    }
}
