//! Training session entity.

use serde::{Deserialize, Serialize};

use crate::domain::serde_utils;
use crate::domain::view_state::MountDate;

/// Server-assigned identifier of a training session, kept as the text the
/// server sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(#[serde(deserialize_with = "serde_utils::scalar_text")] String);

impl SessionId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for SessionId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One scheduled day with up to two time-slotted activities.
///
/// Sessions are immutable once fetched; only accessors are exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSession {
    id: SessionId,
    day: String,
    date: String,
    time_session_1: String,
    session_1: String,
    time_session_2: String,
    session_2: String,
}

impl TrainingSession {
    /// Creates a session with both activity slots empty.
    #[must_use]
    pub fn new(id: impl Into<SessionId>, day: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            day: day.into(),
            date: date.into(),
            time_session_1: String::new(),
            session_1: String::new(),
            time_session_2: String::new(),
            session_2: String::new(),
        }
    }

    /// Sets the morning slot.
    #[must_use]
    pub fn with_morning(mut self, time: impl Into<String>, session: impl Into<String>) -> Self {
        self.time_session_1 = time.into();
        self.session_1 = session.into();
        self
    }

    /// Sets the afternoon slot.
    #[must_use]
    pub fn with_afternoon(mut self, time: impl Into<String>, session: impl Into<String>) -> Self {
        self.time_session_2 = time.into();
        self.session_2 = session.into();
        self
    }

    #[must_use]
    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn day(&self) -> &str {
        &self.day
    }

    /// ISO calendar date exactly as the server sent it.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn time_session_1(&self) -> &str {
        &self.time_session_1
    }

    #[must_use]
    pub fn session_1(&self) -> &str {
        &self.session_1
    }

    #[must_use]
    pub fn time_session_2(&self) -> &str {
        &self.time_session_2
    }

    #[must_use]
    pub fn session_2(&self) -> &str {
        &self.session_2
    }

    /// Key combining date and id, unique within one fetched schedule.
    #[must_use]
    pub fn display_key(&self) -> String {
        format!("{}-{}", self.date, self.id)
    }

    /// Returns true if this session falls on the given mount date.
    #[must_use]
    pub fn is_on(&self, mount_date: &MountDate) -> bool {
        self.date == mount_date.as_str()
    }
}
