//! Run log entry data structures
//!
//! Defines the severity levels and the single-line text format of the run log.

use chrono::{Local, NaiveDateTime};

/// Timestamp layout at the start of every log entry
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A single run log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// When the entry was recorded (local time)
    pub timestamp: NaiveDateTime,

    /// Severity
    pub level: LogLevel,

    /// Message text, possibly spanning several lines
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self::at(Local::now().naive_local(), level, message)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(timestamp: NaiveDateTime, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
        }
    }

    /// Format as `<timestamp> - <LEVEL> - <message>`
    ///
    /// Trailing line breaks of the message are dropped; inner ones are kept.
    pub fn format_line(&self) -> String {
        format!(
            "{} - {} - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message.trim_end_matches(['\r', '\n'])
        )
    }
}
