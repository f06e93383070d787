//! Dashboard view model
//!
//! Pure projection of fetched records into display strings. Components and
//! headless output both render from these rows.

use super::utils::{
    PlaceholderMode, format_confidence, format_timestamp, format_was_correct, is_present, plain,
    text_or,
};
use crate::consts::dashboard_consts::placeholders;
use crate::models::{FeedbackRecord, StoredItem, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub label: String,
    /// Empty for the leading placeholder option.
    pub email: String,
}

/// The selector's options: a placeholder entry, then one per loaded user.
pub fn selector_options(users: &[UserProfile]) -> Vec<SelectorOption> {
    std::iter::once(SelectorOption {
        label: placeholders::SELECT_USER.to_string(),
        email: String::new(),
    })
    .chain(users.iter().map(|user| SelectorOption {
        label: user.email.clone(),
        email: user.email.clone(),
    }))
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentUserView {
    pub email: String,
    pub created_at: String,
}

pub fn recent_user_view(user: &UserProfile, mode: PlaceholderMode) -> RecentUserView {
    RecentUserView {
        email: user.email.clone(),
        created_at: format_timestamp(user.created_at.as_deref(), mode),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRow {
    pub created_at: String,
    pub transcript: String,
    pub intent: String,
    pub item: String,
    pub location: String,
    pub confidence: String,
    pub action_type: String,
    pub was_correct: String,
    /// Corrections, note and audio link, when any are present.
    pub detail: Option<String>,
}

pub fn feedback_row(record: &FeedbackRecord, mode: PlaceholderMode) -> FeedbackRow {
    let extras = [
        ("corrected item", record.corrected_item.as_deref()),
        ("corrected location", record.corrected_location.as_deref()),
        ("corrected command", record.corrected_command.as_deref()),
        ("note", record.note.as_deref()),
        ("audio", record.audio_url.as_deref()),
    ];
    let detail: Vec<String> = extras
        .iter()
        .filter(|(_, value)| is_present(*value, mode))
        .map(|(label, value)| format!("{}: {}", label, plain(*value)))
        .collect();

    FeedbackRow {
        created_at: format_timestamp(record.created_at.as_deref(), mode),
        transcript: text_or(
            record.transcript.as_deref(),
            placeholders::NO_TRANSCRIPT,
            mode,
        ),
        intent: plain(record.intent.as_deref()),
        item: plain(record.item.as_deref()),
        location: text_or(record.location.as_deref(), placeholders::NO_LOCATION, mode),
        confidence: format_confidence(record.confidence_score, mode),
        action_type: plain(record.action_type.as_deref()),
        was_correct: format_was_correct(record.was_correct, mode),
        detail: (!detail.is_empty()).then(|| detail.join(" · ")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub item_name: String,
    pub location: String,
    pub notes: String,
    pub created_at: String,
}

pub fn item_row(item: &StoredItem, mode: PlaceholderMode) -> ItemRow {
    ItemRow {
        item_name: item.item_name.clone(),
        location: item.location.clone(),
        notes: text_or(item.notes.as_deref(), placeholders::NO_NOTES, mode),
        created_at: format_timestamp(item.created_at.as_deref(), mode),
    }
}
