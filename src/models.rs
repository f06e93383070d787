//! Records mirrored from the remote table service.
//!
//! All three record types are read-only snapshots. Timestamps are kept as the
//! raw strings the service returns and only parsed when rendered.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque row identifier. The service may hand out integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A registered end-user, selectable by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One logged voice-command interpretation, with an optional human correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: RecordId,
    #[serde(default)]
    pub created_at: Option<String>,
    pub user_id: String,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub action_type: Option<String>,
    /// Tri-state: `None` means nobody reviewed the interpretation.
    #[serde(default)]
    pub was_correct: Option<bool>,
    #[serde(default)]
    pub corrected_item: Option<String>,
    #[serde(default)]
    pub corrected_location: Option<String>,
    #[serde(default)]
    pub corrected_command: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

/// One inventory entry a user has saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    pub id: RecordId,
    pub item_name: String,
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_row_with_nulls_and_extra_columns() {
        let json = r#"{
            "id": 42,
            "created_at": "2024-05-01T12:34:56.789+00:00",
            "user_id": "u-1",
            "transcript": "put the drill in the garage",
            "intent": "store_item",
            "item": "drill",
            "location": null,
            "confidence_score": 0.87,
            "action_type": "store",
            "was_correct": null,
            "corrected_item": null,
            "corrected_location": "shed",
            "corrected_command": null,
            "note": null,
            "audio_url": null,
            "session_id": "ignored"
        }"#;
        let record: FeedbackRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::Number(42));
        assert_eq!(record.location, None);
        assert_eq!(record.was_correct, None);
        assert_eq!(record.confidence_score, Some(0.87));
        assert_eq!(record.corrected_location.as_deref(), Some("shed"));
    }

    #[test]
    fn test_feedback_row_missing_optional_columns() {
        let json = r#"{"id": "f-1", "user_id": "u-1"}"#;
        let record: FeedbackRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::Text("f-1".to_string()));
        assert!(record.created_at.is_none());
        assert!(record.transcript.is_none());
    }

    #[test]
    fn test_stored_item_and_user_profile() {
        let item: StoredItem = serde_json::from_str(
            r#"{"id": 7, "item_name": "hammer", "location": "toolbox", "notes": "", "created_at": null, "user_id": "u-1"}"#,
        )
        .unwrap();
        assert_eq!(item.notes.as_deref(), Some(""));
        assert_eq!(item.id.to_string(), "7");

        let user: UserProfile =
            serde_json::from_str(r#"{"user_id": "u-1", "email": "a@example.com"}"#).unwrap();
        assert_eq!(user.created_at, None);
    }
}
