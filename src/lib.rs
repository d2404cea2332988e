//! remote-backup - mirror a local directory to a remote host
//!
//! This library runs an external sync program (`rsync` by default) to copy a
//! source directory to a `user@host:path` destination, records every step in
//! an append-only run log, and snapshots the log's tail into report files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `log`: The append-only run log
//! - `runner`: Sync command construction and the backup step
//! - `report`: Report generation and retention
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use remote_backup::cli::{handle_run_command, RunSteps};
//! use remote_backup::config::{BackupPaths, Settings};
//!
//! let paths = BackupPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let summary = handle_run_command(&paths, &settings, RunSteps::All, false);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod report;
pub mod runner;

pub use error::BackupError;
