//! Backup runner
//!
//! Checks the source directory, runs the sync program and records the outcome
//! in the run log. Nothing past [`BackupRunner::perform_backup`] ever sees an
//! error; every failure ends up as a log entry and a [`BackupOutcome`].

use crate::error::{BackupError, BackupResult};
use crate::log::{LogLevel, RunLogger};

use super::command::SyncCommand;
use super::process::ProcessRunner;

/// How a backup attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// The sync program exited with status 0
    Completed,
    /// The sync program exited non-zero, or was killed (`code` is `None`)
    Failed { code: Option<i32> },
    /// The source directory was not there; the sync program was not run
    MissingSource { path: String },
    /// Anything else went wrong before an exit status was available
    Aborted { reason: String },
}

impl BackupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BackupOutcome::Completed)
    }
}

/// Runs one backup and logs what happened
pub struct BackupRunner<R: ProcessRunner> {
    command: SyncCommand,
    logger: RunLogger,
    runner: R,
}

impl<R: ProcessRunner> BackupRunner<R> {
    pub fn new(command: SyncCommand, logger: RunLogger, runner: R) -> Self {
        Self {
            command,
            logger,
            runner,
        }
    }

    /// Perform the backup, logging instead of returning errors
    pub fn perform_backup(&self) -> BackupOutcome {
        match self.try_backup() {
            Ok(outcome) => outcome,
            Err(err) => {
                self.logger.record(
                    LogLevel::Error,
                    format!("Backup operation failed with exception: {}", err),
                );

                match err {
                    BackupError::MissingSource(path) => BackupOutcome::MissingSource { path },
                    other => BackupOutcome::Aborted {
                        reason: other.to_string(),
                    },
                }
            }
        }
    }

    fn try_backup(&self) -> BackupResult<BackupOutcome> {
        // Log write failures never change the outcome
        self.logger.record(LogLevel::Info, "Starting backup operation...");

        let source = &self.command.source;
        if !source.exists() {
            return Err(BackupError::MissingSource(source.display().to_string()));
        }

        let output = self
            .runner
            .run(&self.command.program, &self.command.args())
            .map_err(|e| BackupError::Process {
                program: self.command.program.clone(),
                reason: e.to_string(),
            })?;

        if output.success() {
            self.logger.record(LogLevel::Info, "Backup completed successfully.");
            self.logger.record(LogLevel::Info, output.stdout);
            Ok(BackupOutcome::Completed)
        } else {
            self.logger.record(LogLevel::Error, "Backup failed.");
            self.logger.record(LogLevel::Error, output.stderr);
            Ok(BackupOutcome::Failed {
                code: output.status,
            })
        }
    }
}
