//! Path management for remote-backup
//!
//! Provides XDG-compliant path resolution for the settings file, run log and
//! report directory.
//!
//! ## Path Resolution Order
//!
//! 1. `REMOTE_BACKUP_HOME` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/remote-backup` or `~/.config/remote-backup`
//! 3. Windows: `%APPDATA%\remote-backup`

use std::path::{Path, PathBuf};

use crate::error::BackupError;

/// Environment variable that overrides the base directory
pub const HOME_ENV_VAR: &str = "REMOTE_BACKUP_HOME";

/// Manages all paths used by remote-backup
#[derive(Debug, Clone)]
pub struct BackupPaths {
    /// Base directory for settings, log and reports
    base_dir: PathBuf,
}

impl BackupPaths {
    /// Create a new BackupPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BackupError> {
        let base_dir = if let Ok(custom) = std::env::var(HOME_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BackupPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/remote-backup/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory reports are written to
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Resolve the configured log file name against the base directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn log_file(&self, configured: &Path) -> PathBuf {
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            self.base_dir.join(configured)
        }
    }

    /// Ensure the base and report directories exist
    pub fn ensure_directories(&self) -> Result<(), BackupError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BackupError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.reports_dir())
            .map_err(|e| BackupError::Io(format!("Failed to create reports directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BackupError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                BackupError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("remote-backup"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BackupError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BackupError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("remote-backup"))
}
