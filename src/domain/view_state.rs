//! View state for the training schedule.
//!
//! The view is in exactly one of three states. `Loading` is the only state
//! that accepts a load outcome; `Loaded` and `Failed` are terminal until the
//! whole view is remounted.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entities::TrainingSession;
use super::errors::ScheduleError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Clock used to decide which calendar day is "today".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TodayClock {
    /// UTC calendar date.
    #[default]
    Utc,
    /// Local calendar date.
    Local,
}

impl TodayClock {
    /// Returns the current calendar date on this clock.
    #[must_use]
    pub fn today(self) -> NaiveDate {
        match self {
            Self::Utc => Utc::now().date_naive(),
            Self::Local => Local::now().date_naive(),
        }
    }
}

impl std::fmt::Display for TodayClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utc => write!(f, "utc"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Calendar date captured once when the view is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountDate {
    date: NaiveDate,
    iso: String,
}

impl MountDate {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            iso: date.format(ISO_DATE_FORMAT).to_string(),
        }
    }

    /// Captures today's date on the given clock.
    #[must_use]
    pub fn capture(clock: TodayClock) -> Self {
        Self::new(clock.today())
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// ISO `YYYY-MM-DD` representation used for comparison.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.iso
    }
}

/// A fetched schedule.
#[derive(Debug, Clone)]
pub struct Schedule {
    sessions: Vec<TrainingSession>,
    loaded_at: DateTime<Local>,
}

impl Schedule {
    #[must_use]
    pub fn new(sessions: Vec<TrainingSession>, loaded_at: DateTime<Local>) -> Self {
        Self {
            sessions,
            loaded_at,
        }
    }

    /// Sessions in the order they were received.
    #[must_use]
    pub fn sessions(&self) -> &[TrainingSession] {
        &self.sessions
    }

    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Local> {
        self.loaded_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Position of the first session on the mount date.
    #[must_use]
    pub fn position_of(&self, mount_date: &MountDate) -> Option<usize> {
        self.sessions.iter().position(|s| s.is_on(mount_date))
    }
}

/// Which body the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Request outstanding.
    Loading,
    /// Request failed.
    Error,
    /// Request succeeded with no sessions.
    Empty,
    /// Request succeeded with at least one session.
    Populated,
}

/// State of the mounted schedule view.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    /// Waiting for the one request of this mount.
    #[default]
    Loading,
    /// Schedule received.
    Loaded(Schedule),
    /// Request failed with the given message.
    Failed(String),
}

impl ViewState {
    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        match self {
            Self::Loading => RenderMode::Loading,
            Self::Failed(_) => RenderMode::Error,
            Self::Loaded(schedule) if schedule.is_empty() => RenderMode::Empty,
            Self::Loaded(_) => RenderMode::Populated,
        }
    }

    /// Applies the outcome of the load. Returns false and leaves the state
    /// untouched if it is no longer `Loading`.
    pub fn resolve(&mut self, outcome: Result<Vec<TrainingSession>, ScheduleError>) -> bool {
        if !matches!(self, Self::Loading) {
            return false;
        }

        *self = match outcome {
            Ok(sessions) => Self::Loaded(Schedule::new(sessions, Local::now())),
            Err(e) => Self::Failed(e.to_string()),
        };
        true
    }

    #[must_use]
    pub const fn schedule(&self) -> Option<&Schedule> {
        match self {
            Self::Loaded(schedule) => Some(schedule),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> MountDate {
        MountDate::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ViewState::default();
        assert_eq!(state.render_mode(), RenderMode::Loading);
        assert!(state.schedule().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_resolve_empty_collection() {
        let mut state = ViewState::Loading;
        assert!(state.resolve(Ok(Vec::new())));
        assert_eq!(state.render_mode(), RenderMode::Empty);
    }

    #[test]
    fn test_resolve_preserves_order() {
        let mut state = ViewState::Loading;
        let sessions = vec![
            TrainingSession::new(3, "Wed", "2024-01-03"),
            TrainingSession::new(1, "Mon", "2024-01-01"),
        ];
        state.resolve(Ok(sessions));

        assert_eq!(state.render_mode(), RenderMode::Populated);
        let ids: Vec<&str> = state
            .schedule()
            .unwrap()
            .sessions()
            .iter()
            .map(|s| s.id().as_str())
            .collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_resolve_failure_keeps_message() {
        let mut state = ViewState::Loading;
        state.resolve(Err(ScheduleError::fetch_failed("connection refused")));

        assert_eq!(state.render_mode(), RenderMode::Error);
        assert_eq!(state.error_message(), Some("connection refused"));
    }

    #[test]
    fn test_terminal_states_ignore_further_outcomes() {
        let mut state = ViewState::Loading;
        state.resolve(Err(ScheduleError::fetch_failed("boom")));

        assert!(!state.resolve(Ok(vec![TrainingSession::new(1, "Mon", "2024-01-01")])));
        assert_eq!(state.render_mode(), RenderMode::Error);

        let mut state = ViewState::Loading;
        state.resolve(Ok(Vec::new()));
        assert!(!state.resolve(Err(ScheduleError::fetch_failed("late"))));
        assert_eq!(state.render_mode(), RenderMode::Empty);
    }

    #[test]
    fn test_mount_date_iso() {
        assert_eq!(date(2024, 1, 2).as_str(), "2024-01-02");
        assert_eq!(date(2024, 11, 30).as_str(), "2024-11-30");
    }

    #[test]
    fn test_position_of_today() {
        let schedule = Schedule::new(
            vec![
                TrainingSession::new(1, "Mon", "2024-01-01"),
                TrainingSession::new(2, "Tue", "2024-01-02"),
            ],
            Local::now(),
        );
        assert_eq!(schedule.position_of(&date(2024, 1, 2)), Some(1));
        assert_eq!(schedule.position_of(&date(2024, 1, 9)), None);
    }

    #[test]
    fn test_today_clock_parses_lowercase() {
        let clock: TodayClock = serde_json::from_str(r#""local""#).unwrap();
        assert_eq!(clock, TodayClock::Local);
        assert_eq!(TodayClock::default().to_string(), "utc");
    }
}
