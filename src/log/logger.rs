//! Append-only run log
//!
//! Every entry is echoed to the console and appended to the log file, which is
//! flushed after each write.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{BackupError, BackupResult};

use super::entry::{LogEntry, LogLevel};

/// Writes run log entries to the console and the log file
///
/// Console echo sends INFO to stdout and WARNING/ERROR to stderr.
#[derive(Debug, Clone)]
pub struct RunLogger {
    /// Path to the log file
    log_path: PathBuf,
    /// Whether entries are also printed to the console
    echo: bool,
}

impl RunLogger {
    /// Create a new RunLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path,
            echo: true,
        }
    }

    /// Turn console echo on or off
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Log a message at the given level
    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> BackupResult<()> {
        self.write_entry(&LogEntry::now(level, message))
    }

    pub fn info(&self, message: impl Into<String>) -> BackupResult<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> BackupResult<()> {
        self.log(LogLevel::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> BackupResult<()> {
        self.log(LogLevel::Error, message)
    }

    /// Log a message, reporting a failed write on stderr instead of returning it
    pub fn record(&self, level: LogLevel, message: impl Into<String>) {
        if let Err(err) = self.log(level, message) {
            eprintln!("Failed to write run log: {}", err);
        }
    }

    /// Echo and append a prepared entry
    pub fn write_entry(&self, entry: &LogEntry) -> BackupResult<()> {
        if self.echo {
            match entry.level {
                LogLevel::Info => println!("{}", entry.message),
                LogLevel::Warning | LogLevel::Error => eprintln!("{}", entry.message),
            }
        }

        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    BackupError::Io(format!("Failed to create log directory: {}", e))
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| BackupError::Io(format!("Failed to open log file: {}", e)))?;

        writeln!(file, "{}", entry.format_line())
            .map_err(|e| BackupError::Io(format!("Failed to write log entry: {}", e)))?;

        file.flush()
            .map_err(|e| BackupError::Io(format!("Failed to flush log file: {}", e)))?;

        Ok(())
    }

    /// Read every physical line of the log file
    pub fn read_lines(&self) -> BackupResult<Vec<String>> {
        if !self.log_path.exists() {
            return Err(BackupError::log_not_found(self.log_path.display().to_string()));
        }

        let file = File::open(&self.log_path)
            .map_err(|e| BackupError::Io(format!("Failed to open log file: {}", e)))?;

        let reader = BufReader::new(file);
        let mut lines = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                BackupError::Io(format!("Failed to read log line {}: {}", line_num + 1, e))
            })?;
            lines.push(line);
        }

        Ok(lines)
    }

    /// Read the last `count` lines of the log file
    pub fn tail(&self, count: usize) -> BackupResult<Vec<String>> {
        let mut lines = self.read_lines()?;
        let start = lines.len().saturating_sub(count);
        Ok(lines.split_off(start))
    }

    /// Check if the log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
