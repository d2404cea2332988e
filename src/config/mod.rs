//! Configuration module for remote-backup
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence

pub mod paths;
pub mod settings;

pub use paths::BackupPaths;
pub use settings::Settings;
