//! Custom error types for remote-backup
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for remote-backup operations
#[derive(Error, Debug)]
pub enum BackupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The directory to back up is not there
    #[error("Source directory does not exist: {0}")]
    MissingSource(String),

    /// The sync program could not be started or waited on
    #[error("Failed to run {program}: {reason}")]
    Process { program: String, reason: String },

    /// Report generation errors
    #[error("Report error: {0}")]
    Report(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl BackupError {
    /// Create a "not found" error for the run log
    pub fn log_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Log file",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for BackupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BackupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for remote-backup operations
pub type BackupResult<T> = Result<T, BackupError>;
