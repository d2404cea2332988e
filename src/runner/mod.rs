//! Backup runner for remote-backup
//!
//! Copies the source directory to the remote host with an external sync
//! program and writes the result to the run log.
//!
//! # Architecture
//!
//! - `SyncCommand` / `RemoteTarget`: the command line to run
//! - `ProcessRunner`: runs a program and captures exit code, stdout and stderr;
//!   `SystemRunner` is the real implementation
//! - `BackupRunner`: the precondition check, the call and the logging
//!
//! # Example
//!
//! ```rust,ignore
//! use remote_backup::runner::{BackupRunner, SystemRunner};
//!
//! let runner = BackupRunner::new(settings.sync_command(), logger, SystemRunner);
//! let outcome = runner.perform_backup();
//! ```

mod backup;
mod command;
mod process;

pub use backup::{BackupOutcome, BackupRunner};
pub use command::{RemoteTarget, SyncCommand};
pub use process::{ProcessOutput, ProcessRunner, SystemRunner};
