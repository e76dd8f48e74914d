use serde::Deserialize;

use crate::domain::entities::{SessionId, TrainingSession};
use crate::domain::serde_utils::scalar_text;

/// One element of the `/api/training-data/` array. Every column is optional;
/// absent or `null` values render as empty cells.
#[derive(Debug, Deserialize)]
pub struct TrainingSessionRecord {
    #[serde(default)]
    pub id: SessionId,
    #[serde(default, deserialize_with = "scalar_text")]
    pub day: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub date: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub time_session_1: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub session_1: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub time_session_2: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub session_2: String,
}

impl From<TrainingSessionRecord> for TrainingSession {
    fn from(record: TrainingSessionRecord) -> Self {
        Self::new(record.id, record.day, record.date)
            .with_morning(record.time_session_1, record.session_1)
            .with_afternoon(record.time_session_2, record.session_2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> TrainingSession {
        TrainingSession::from(serde_json::from_str::<TrainingSessionRecord>(body).unwrap())
    }

    #[test]
    fn test_record_from_server_payload() {
        let body = r#"[{"id":1,"day":"Mon","date":"2024-01-01","time_session_1":"7am","session_1":"Swim","time_session_2":"6pm","session_2":"Run"}]"#;
        let records: Vec<TrainingSessionRecord> = serde_json::from_str(body).unwrap();
        let session = TrainingSession::from(records.into_iter().next().unwrap());

        assert_eq!(session.display_key(), "2024-01-01-1");
        assert_eq!(session.session_1(), "Swim");
        assert_eq!(session.session_2(), "Run");
    }

    #[test]
    fn test_nullable_columns_render_empty() {
        let session = decode(
            r#"{"id":"4","day":"Thu","date":"2024-01-04","time_session_1":null,"session_1":"Rest","time_session_2":null,"session_2":null}"#,
        );

        assert_eq!(session.id().as_str(), "4");
        assert_eq!(session.time_session_1(), "");
        assert_eq!(session.session_1(), "Rest");
        assert_eq!(session.session_2(), "");
    }

    #[test]
    fn test_text_id_kept_verbatim() {
        let session = decode(r#"{"id":"a1","day":"Mon","date":"2024-01-01"}"#);

        assert_eq!(session.id().as_str(), "a1");
        assert_eq!(session.display_key(), "2024-01-01-a1");
    }

    #[test]
    fn test_null_or_missing_date_still_decodes() {
        let null_date = decode(r#"{"id":1,"day":"Mon","date":null,"session_1":"Swim"}"#);
        let no_date = decode(r#"{"id":2,"day":"Tue"}"#);

        assert_eq!(null_date.date(), "");
        assert_eq!(null_date.session_1(), "Swim");
        assert_eq!(no_date.date(), "");
        assert_eq!(no_date.day(), "Tue");
    }

    #[test]
    fn test_non_scalar_column_is_rejected() {
        let body = r#"{"id":1,"date":"2024-01-01","session_1":["Swim"]}"#;
        assert!(serde_json::from_str::<TrainingSessionRecord>(body).is_err());
    }
}
