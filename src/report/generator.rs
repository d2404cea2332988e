//! Report generator
//!
//! Snapshots the tail of the run log into a timestamped text file, and keeps
//! the report directory from growing without bound.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{BackupError, BackupResult};
use crate::log::{LogLevel, RunLogger};

/// Filename prefix shared by every report
pub const REPORT_PREFIX: &str = "backup_report_";

/// Second line of every report
pub const HEADER_RULE: &str = "================================";

/// Human-readable timestamp used in the report header
const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The header timestamp with `:` and ` ` replaced by `_`
const FILENAME_TIME_FORMAT: &str = "%Y-%m-%d_%H_%M_%S";

/// Build the report filename for a point in time
///
/// `backup_report_2025-03-14_09_26_53.txt`: one name per second, free of `:`
/// and spaces.
pub fn report_filename(now: NaiveDateTime) -> String {
    let stamp = now
        .format(HEADER_TIME_FORMAT)
        .to_string()
        .replace([':', ' '], "_");
    format!("{}{}.txt", REPORT_PREFIX, stamp)
}

/// Metadata about a report file on disk
#[derive(Debug, Clone)]
pub struct ReportInfo {
    pub filename: String,
    pub path: PathBuf,
    /// Parsed from the filename
    pub created_at: NaiveDateTime,
    pub size_bytes: u64,
}

/// Writes log-tail reports into a directory
pub struct ReportGenerator {
    reports_dir: PathBuf,
    /// Maximum number of log lines per report
    lines: usize,
}

impl ReportGenerator {
    pub fn new(reports_dir: PathBuf, lines: usize) -> Self {
        Self { reports_dir, lines }
    }

    /// Write a report of the log's last lines, stamped with `now`
    ///
    /// Fails if the log is missing, unreadable or empty. A report from the same
    /// second is overwritten.
    pub fn generate_at(&self, log: &RunLogger, now: NaiveDateTime) -> BackupResult<PathBuf> {
        let lines = log.tail(self.lines)?;
        if lines.is_empty() {
            return Err(BackupError::Report(format!(
                "Log file is empty: {}",
                log.path().display()
            )));
        }

        fs::create_dir_all(&self.reports_dir).map_err(|e| {
            BackupError::Io(format!("Failed to create reports directory: {}", e))
        })?;

        let report_path = self.reports_dir.join(report_filename(now));
        let file = File::create(&report_path)
            .map_err(|e| BackupError::Io(format!("Failed to create report file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "Backup Report - {}", now.format(HEADER_TIME_FORMAT))?;
        writeln!(writer, "{}", HEADER_RULE)?;
        for line in &lines {
            writeln!(writer, "{}", line)?;
        }
        writer
            .flush()
            .map_err(|e| BackupError::Io(format!("Failed to flush report file: {}", e)))?;

        Ok(report_path)
    }

    /// List report files, newest first
    pub fn list_reports(&self) -> BackupResult<Vec<ReportInfo>> {
        if !self.reports_dir.exists() {
            return Ok(Vec::new());
        }

        let mut reports = Vec::new();

        for entry in fs::read_dir(&self.reports_dir)
            .map_err(|e| BackupError::Io(format!("Failed to read reports directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| BackupError::Io(format!("Failed to read directory entry: {}", e)))?;

            if let Some(info) = parse_report_info(&entry.path()) {
                reports.push(info);
            }
        }

        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(reports)
    }

    /// Delete all but the newest `keep` reports
    pub fn enforce_retention(&self, keep: usize) -> BackupResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for report in self.list_reports()?.into_iter().skip(keep) {
            fs::remove_file(&report.path)
                .map_err(|e| BackupError::Io(format!("Failed to delete old report: {}", e)))?;
            deleted.push(report.path);
        }

        Ok(deleted)
    }

    /// Get the most recent report
    pub fn latest_report(&self) -> BackupResult<Option<ReportInfo>> {
        Ok(self.list_reports()?.into_iter().next())
    }

    pub fn reports_dir(&self) -> &PathBuf {
        &self.reports_dir
    }
}

/// Generate a report for the current time, logging instead of returning errors
///
/// Returns the report path on success.
pub fn generate_backup_report(generator: &ReportGenerator, log: &RunLogger) -> Option<PathBuf> {
    let now = Local::now().naive_local();

    // Checked before the log gains the line below
    let result = ensure_log_has_entries(log).and_then(|_| {
        log.record(LogLevel::Info, "Generating backup report...");
        generator.generate_at(log, now)
    });

    match result {
        Ok(path) => {
            log.record(
                LogLevel::Info,
                format!("Backup report generated: {}", path.display()),
            );
            Some(path)
        }
        Err(err) => {
            log.record(
                LogLevel::Error,
                format!("Failed to generate backup report: {}", err),
            );
            None
        }
    }
}

fn ensure_log_has_entries(log: &RunLogger) -> BackupResult<()> {
    let metadata = fs::metadata(log.path())
        .map_err(|_| BackupError::log_not_found(log.path().display().to_string()))?;

    if metadata.len() == 0 {
        return Err(BackupError::Report(format!(
            "Log file is empty: {}",
            log.path().display()
        )));
    }
    Ok(())
}

fn parse_report_info(path: &Path) -> Option<ReportInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let stamp = filename.strip_prefix(REPORT_PREFIX)?.strip_suffix(".txt")?;
    let created_at = NaiveDateTime::parse_from_str(stamp, FILENAME_TIME_FORMAT).ok()?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(ReportInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}
