//! Event System
//!
//! Developer-log entries shown in the activity panel.

use crate::logging::LogLevel;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Log target, e.g. `users` or `detail`.
    pub target: String,
    pub msg: String,
    pub timestamp: String,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(target: String, msg: String, log_level: LogLevel) -> Self {
        Self {
            target,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            log_level,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.log_level >= LogLevel::Warn
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.log_level, self.timestamp, self.target, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let mut event = Event::new(
            "detail".to_string(),
            "Failed to load data".to_string(),
            LogLevel::Error,
        );
        event.timestamp = "2024-05-01 12:00:00".to_string();
        assert_eq!(
            event.to_string(),
            "ERROR [2024-05-01 12:00:00] detail: Failed to load data"
        );
        assert!(event.is_failure());
    }
}
