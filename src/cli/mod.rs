//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the runner and report layers.

pub mod reports;
pub mod run;

pub use reports::{handle_reports_command, ReportsCommands};
pub use run::{handle_run_command, RunSteps, RunSummary};
