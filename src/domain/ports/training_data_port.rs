//! Training data port definition.

use async_trait::async_trait;

use crate::domain::entities::TrainingSession;
use crate::domain::errors::ScheduleError;

/// Port for obtaining the training schedule.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainingDataPort: Send + Sync {
    /// Fetches every session, in the order the source returns them.
    async fn fetch_sessions(&self) -> Result<Vec<TrainingSession>, ScheduleError>;
}
