//! Training data HTTP client.

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::dto::TrainingSessionRecord;
use crate::domain::entities::TrainingSession;
use crate::domain::errors::ScheduleError;
use crate::domain::ports::TrainingDataPort;

/// Endpoint path, relative to the server base URL.
pub const TRAINING_DATA_PATH: &str = "api/training-data/";

const USER_AGENT: &str = concat!("training-plan/", env!("CARGO_PKG_VERSION"));

/// Fetches the training schedule from the backend.
pub struct TrainingDataClient {
    client: Client,
    endpoint: Url,
}

impl TrainingDataClient {
    /// Creates client without a request timeout.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or HTTP client creation fails.
    pub fn new(server_url: &str) -> Result<Self, ScheduleError> {
        Self::with_timeout(server_url, None)
    }

    /// Creates client with an optional request timeout.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or HTTP client creation fails.
    pub fn with_timeout(server_url: &str, timeout: Option<Duration>) -> Result<Self, ScheduleError> {
        let endpoint = resolve_endpoint(server_url)?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            ScheduleError::client_setup(format!("failed to create HTTP client: {e}"))
        })?;

        Ok(Self { client, endpoint })
    }

    /// Fully resolved endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn resolve_endpoint(server_url: &str) -> Result<Url, ScheduleError> {
    let mut base = Url::parse(server_url.trim()).map_err(|e| {
        ScheduleError::client_setup(format!("invalid server URL {server_url:?}: {e}"))
    })?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(ScheduleError::client_setup(format!(
            "unsupported scheme in server URL {server_url:?}"
        )));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(TRAINING_DATA_PATH)
        .map_err(|e| ScheduleError::client_setup(format!("invalid endpoint: {e}")))
}

fn describe(error: &reqwest::Error) -> String {
    match error.source() {
        Some(source) => format!("{error}: {source}"),
        None => error.to_string(),
    }
}

#[async_trait]
impl TrainingDataPort for TrainingDataClient {
    async fn fetch_sessions(&self) -> Result<Vec<TrainingSession>, ScheduleError> {
        debug!(url = %self.endpoint, "Requesting training data");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach training data endpoint");
                ScheduleError::fetch_failed(describe(&e))
            })?;

        let status = response.status();

        if !status.is_success() {
            warn!(status = %status, "Training data endpoint returned an error status");
            return Err(ScheduleError::fetch_failed(format!(
                "Network response was not ok (HTTP {status})"
            )));
        }

        let records: Vec<TrainingSessionRecord> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse training data");
            ScheduleError::fetch_failed(describe(&e))
        })?;

        debug!(count = records.len(), "Training data received");

        Ok(records.into_iter().map(TrainingSession::from).collect())
    }
}
