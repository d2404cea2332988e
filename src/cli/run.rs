//! Backup and report steps
//!
//! Wires settings and paths into the runner and the report generator. Both
//! steps swallow their own errors; the summary only says whether they worked.

use std::path::PathBuf;

use crate::config::paths::BackupPaths;
use crate::config::settings::Settings;
use crate::log::RunLogger;
use crate::report::{generate_backup_report, ReportGenerator};
use crate::runner::{BackupOutcome, BackupRunner, SystemRunner};

/// Which steps to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSteps {
    /// Backup, then report
    All,
    BackupOnly,
    ReportOnly,
}

/// What happened during a run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// `None` if the backup step was not run
    pub backup: Option<BackupOutcome>,
    /// `None` if the report step was not run; `Some(None)` if it failed
    pub report: Option<Option<PathBuf>>,
}

impl RunSummary {
    /// True when every step that ran succeeded
    pub fn succeeded(&self) -> bool {
        let backup_ok = self.backup.as_ref().map_or(true, BackupOutcome::is_success);
        let report_ok = self.report.as_ref().map_or(true, Option::is_some);
        backup_ok && report_ok
    }
}

/// Build the run logger for these settings
pub fn run_logger(paths: &BackupPaths, settings: &Settings, quiet: bool) -> RunLogger {
    RunLogger::new(paths.log_file(&settings.log_file)).with_echo(!quiet)
}

/// Build the report generator for these settings
pub fn report_generator(paths: &BackupPaths, settings: &Settings) -> ReportGenerator {
    ReportGenerator::new(paths.reports_dir(), settings.report.lines)
}

/// Run the requested steps in order
pub fn handle_run_command(
    paths: &BackupPaths,
    settings: &Settings,
    steps: RunSteps,
    quiet: bool,
) -> RunSummary {
    let logger = run_logger(paths, settings, quiet);
    let mut summary = RunSummary::default();

    if steps != RunSteps::ReportOnly {
        let runner = BackupRunner::new(settings.sync_command(), logger.clone(), SystemRunner);
        summary.backup = Some(runner.perform_backup());
    }

    if steps != RunSteps::BackupOnly {
        let generator = report_generator(paths, settings);
        summary.report = Some(generate_backup_report(&generator, &logger));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (BackupPaths, Settings, TempDir) {
        let temp = TempDir::new().unwrap();
        let paths = BackupPaths::with_base_dir(temp.path().to_path_buf());
        let mut settings = Settings::default();
        settings.source_directory = temp.path().join("missing-source");
        (paths, settings, temp)
    }

    #[test]
    fn test_summary_success_rules() {
        let summary = RunSummary::default();
        assert!(summary.succeeded());

        let summary = RunSummary {
            backup: Some(BackupOutcome::Completed),
            report: Some(None),
        };
        assert!(!summary.succeeded());

        let summary = RunSummary {
            backup: Some(BackupOutcome::Failed { code: Some(1) }),
            report: None,
        };
        assert!(!summary.succeeded());
    }

    #[test]
    fn test_missing_source_still_writes_report() {
        let (paths, settings, _temp) = setup();

        let summary = handle_run_command(&paths, &settings, RunSteps::All, true);

        assert!(!summary.succeeded());
        assert!(matches!(
            summary.backup,
            Some(BackupOutcome::MissingSource { .. })
        ));
        let report = summary.report.unwrap().unwrap();
        let contents = std::fs::read_to_string(report).unwrap();
        assert!(contents.contains("Source directory does not exist"));
    }

    #[test]
    fn test_report_only_without_log_fails() {
        let (paths, settings, _temp) = setup();

        let summary = handle_run_command(&paths, &settings, RunSteps::ReportOnly, true);

        assert!(summary.backup.is_none());
        assert_eq!(summary.report, Some(None));
        assert!(!summary.succeeded());
    }

    #[cfg(unix)]
    #[test]
    fn test_backup_only_with_stand_in_program() {
        let (paths, mut settings, temp) = setup();
        settings.source_directory = temp.path().to_path_buf();
        settings.sync.program = "true".to_string();

        let summary = handle_run_command(&paths, &settings, RunSteps::BackupOnly, true);

        assert_eq!(summary.backup, Some(BackupOutcome::Completed));
        assert!(summary.report.is_none());
        assert!(summary.succeeded());
    }
}
