//! Developer log
//!
//! Routes `log` records into the dashboard event channel so failures can be
//! inspected in the activity panel (TUI) or on stderr (headless).

use crate::events::Event;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::env;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// `log` backend that turns records into dashboard events.
pub struct EventLogger {
    sender: mpsc::UnboundedSender<Event>,
    threshold: LogLevel,
}

impl EventLogger {
    pub fn new(sender: mpsc::UnboundedSender<Event>, threshold: LogLevel) -> Self {
        Self { sender, threshold }
    }
}

impl Log for EventLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Dependencies (hyper, rustls, ...) stay quiet below warnings.
        let level = LogLevel::from(metadata.level());
        let ours = metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
            || !metadata.target().contains("::");
        should_log(level, self.threshold) && (ours || level >= LogLevel::Warn)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let event = Event::new(
            record.target().to_string(),
            record.args().to_string(),
            record.level().into(),
        );
        // The receiver is gone once the session has shut down.
        let _ = self.sender.send(event);
    }

    fn flush(&self) {}
}

/// Installs the event logger and returns the receiving end of its channel.
pub fn init_event_logger(
    threshold: LogLevel,
) -> Result<mpsc::UnboundedReceiver<Event>, SetLoggerError> {
    let (sender, receiver) = mpsc::unbounded_channel();
    log::set_boxed_logger(Box::new(EventLogger::new(sender, threshold)))?;
    log::set_max_level(threshold.into());
    Ok(receiver)
}
