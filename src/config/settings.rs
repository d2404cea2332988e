//! User settings for remote-backup
//!
//! Holds what gets backed up, where it goes, how the sync program is called and
//! how many report files are kept. Every field has a default, so a missing or
//! partial `config.json` is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::BackupPaths;
use crate::error::BackupError;
use crate::runner::{RemoteTarget, SyncCommand};

/// Where the backup is sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSettings {
    /// `user@host` part of the destination
    #[serde(default = "default_remote_server")]
    pub server: String,

    /// Directory on the remote host
    #[serde(default = "default_remote_directory")]
    pub directory: String,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            server: default_remote_server(),
            directory: default_remote_directory(),
        }
    }
}

/// How the sync program is invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Program name or path
    #[serde(default = "default_program")]
    pub program: String,

    /// Flags passed before the source and destination
    #[serde(default = "default_flags")]
    pub flags: Vec<String>,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            flags: default_flags(),
        }
    }
}

/// Report generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Number of trailing log lines copied into each report
    #[serde(default = "default_report_lines")]
    pub lines: usize,

    /// Number of report files kept by `reports prune`
    #[serde(default = "default_keep_reports")]
    pub keep: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            lines: default_report_lines(),
            keep: default_keep_reports(),
        }
    }
}

/// User settings for remote-backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Local directory to back up
    #[serde(default = "default_source_directory")]
    pub source_directory: PathBuf,

    /// Remote destination
    #[serde(default)]
    pub remote: RemoteSettings,

    /// Sync program invocation
    #[serde(default)]
    pub sync: SyncSettings,

    /// Run log location, relative to the base directory unless absolute
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Report settings
    #[serde(default)]
    pub report: ReportSettings,

    /// Exit with a failure status when the backup or report fails
    #[serde(default)]
    pub strict_exit: bool,
}

fn default_source_directory() -> PathBuf {
    PathBuf::from("/path/to/source/directory")
}

fn default_remote_server() -> String {
    "user@remote-server-address".to_string()
}

fn default_remote_directory() -> String {
    "/path/to/remote/directory".to_string()
}

fn default_program() -> String {
    "rsync".to_string()
}

fn default_flags() -> Vec<String> {
    // archive, verbose, compress
    vec!["-avz".to_string()]
}

fn default_log_file() -> PathBuf {
    PathBuf::from("backup.log")
}

fn default_report_lines() -> usize {
    50
}

fn default_keep_reports() -> usize {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_directory: default_source_directory(),
            remote: RemoteSettings::default(),
            sync: SyncSettings::default(),
            log_file: default_log_file(),
            report: ReportSettings::default(),
            strict_exit: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &BackupPaths) -> Result<Self, BackupError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BackupError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BackupPaths) -> Result<(), BackupError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BackupError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the sync command could not be built from
    pub fn validate(&self) -> Result<(), BackupError> {
        if self.sync.program.trim().is_empty() {
            return Err(BackupError::Config("sync.program must not be empty".into()));
        }
        if self.remote.server.trim().is_empty() {
            return Err(BackupError::Config("remote.server must not be empty".into()));
        }
        if self.report.lines == 0 {
            return Err(BackupError::Config(
                "report.lines must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The remote destination described by these settings
    pub fn remote_target(&self) -> RemoteTarget {
        RemoteTarget::new(&self.remote.server, &self.remote.directory)
    }

    /// Build the sync command described by these settings
    pub fn sync_command(&self) -> SyncCommand {
        SyncCommand {
            program: self.sync.program.clone(),
            flags: self.sync.flags.clone(),
            source: self.source_directory.clone(),
            destination: self.remote_target(),
        }
    }
}
