//! Run log for remote-backup
//!
//! Records each step of a backup run in an append-only text log, one entry per
//! message in the form `<timestamp> - <LEVEL> - <message>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use remote_backup::log::RunLogger;
//!
//! let logger = RunLogger::new(log_path);
//! logger.info("Starting backup operation...")?;
//! let recent = logger.tail(50)?;
//! ```

mod entry;
mod logger;

pub use entry::{LogEntry, LogLevel, TIMESTAMP_FORMAT};
pub use logger::RunLogger;
