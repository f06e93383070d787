//! Dashboard utility functions
//!
//! Field formatting and placeholder rules shared across dashboard components.

use crate::consts::dashboard_consts::placeholders;
use crate::logging::LogLevel;
use chrono::{DateTime, Local, NaiveDateTime};
use ratatui::prelude::Color;

/// How absent values are told apart from present-but-empty ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderMode {
    /// Empty strings, zero and null all render as the placeholder.
    #[default]
    Truthy,
    /// Only null renders as the placeholder.
    Strict,
}

impl PlaceholderMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            PlaceholderMode::Strict
        } else {
            PlaceholderMode::Truthy
        }
    }
}

/// Text field with a per-field placeholder.
pub fn text_or(value: Option<&str>, placeholder: &str, mode: PlaceholderMode) -> String {
    match (value, mode) {
        (None, _) => placeholder.to_string(),
        (Some(""), PlaceholderMode::Truthy) => placeholder.to_string(),
        (Some(""), PlaceholderMode::Strict) => placeholders::EMPTY_STRING.to_string(),
        (Some(v), _) => v.to_string(),
    }
}

/// Text field that renders as nothing when absent.
pub fn plain(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Whether an optional string counts as present.
pub fn is_present(value: Option<&str>, mode: PlaceholderMode) -> bool {
    match mode {
        PlaceholderMode::Truthy => value.is_some_and(|v| !v.is_empty()),
        PlaceholderMode::Strict => value.is_some(),
    }
}

pub fn format_confidence(score: Option<f64>, mode: PlaceholderMode) -> String {
    match (score, mode) {
        (None, _) => placeholders::NO_CONFIDENCE.to_string(),
        // Zero and NaN are falsy
        (Some(v), PlaceholderMode::Truthy) if v == 0.0 || v.is_nan() => {
            placeholders::NO_CONFIDENCE.to_string()
        }
        (Some(v), _) => format!("{}", v),
    }
}

pub fn format_was_correct(value: Option<bool>, mode: PlaceholderMode) -> String {
    match (value, mode) {
        (Some(true), _) => placeholders::CORRECT.to_string(),
        (None, PlaceholderMode::Strict) => placeholders::UNREVIEWED.to_string(),
        _ => placeholders::INCORRECT.to_string(),
    }
}

/// Formats a service timestamp in local time.
///
/// Accepts RFC 3339 (`timestamptz`) and zone-less (`timestamp`) values. Anything
/// else is shown verbatim.
pub fn format_timestamp(value: Option<&str>, mode: PlaceholderMode) -> String {
    let raw = match (value, mode) {
        (None, _) | (Some(""), PlaceholderMode::Truthy) => {
            return placeholders::UNKNOWN_DATE.to_string();
        }
        (Some(""), PlaceholderMode::Strict) => return placeholders::EMPTY_STRING.to_string(),
        (Some(raw), _) => raw,
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

/// Get a ratatui color for a developer-log level
pub fn get_level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Cyan,
        LogLevel::Debug | LogLevel::Trace => Color::DarkGray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Shortens a string to `max` characters, ending with an ellipsis.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let kept: String = value.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlaceholderMode::{Strict, Truthy};

    #[test]
    fn test_text_placeholders() {
        assert_eq!(text_or(None, "None", Truthy), "None");
        assert_eq!(text_or(Some(""), "None", Truthy), "None");
        assert_eq!(text_or(Some("hi"), "None", Truthy), "hi");

        assert_eq!(text_or(None, "–", Strict), "–");
        assert_eq!(text_or(Some(""), "–", Strict), "\"\"");
    }

    #[test]
    fn test_confidence() {
        assert_eq!(format_confidence(None, Truthy), "n/a");
        assert_eq!(format_confidence(Some(0.0), Truthy), "n/a");
        assert_eq!(format_confidence(Some(f64::NAN), Truthy), "n/a");
        assert_eq!(format_confidence(Some(0.87), Truthy), "0.87");
        assert_eq!(format_confidence(Some(1.0), Truthy), "1");
        assert_eq!(format_confidence(Some(0.0), Strict), "0");
        assert_eq!(format_confidence(None, Strict), "n/a");
    }

    #[test]
    fn test_was_correct() {
        assert_eq!(format_was_correct(Some(true), Truthy), "✅ Yes");
        assert_eq!(format_was_correct(Some(false), Truthy), "❌ No");
        assert_eq!(format_was_correct(None, Truthy), "❌ No");
        assert_eq!(format_was_correct(None, Strict), "❔ Unknown");
        assert_eq!(format_was_correct(Some(false), Strict), "❌ No");
    }

    #[test]
    fn test_timestamps() {
        assert_eq!(format_timestamp(None, Truthy), "Unknown date");
        assert_eq!(format_timestamp(Some(""), Truthy), "Unknown date");
        assert_eq!(format_timestamp(Some(""), Strict), "\"\"");
        assert_eq!(
            format_timestamp(Some("2024-05-01T12:34:56.123456"), Truthy),
            "2024-05-01 12:34:56"
        );
        assert_eq!(format_timestamp(Some("yesterday"), Truthy), "yesterday");

        let raw = "2024-05-01T12:34:56.789+00:00";
        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(format_timestamp(Some(raw), Truthy), expected);
    }

    #[test]
    fn test_presence() {
        assert!(!is_present(Some(""), Truthy));
        assert!(is_present(Some(""), Strict));
        assert!(!is_present(None, Strict));
        assert_eq!(plain(None), "");
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-05-01 12:34:56"), "05-01 12:34");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer transcript", 8), "a longe…");
    }
}
