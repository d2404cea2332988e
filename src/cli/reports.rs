//! Report management CLI commands
//!
//! Lists report files and prunes old ones.

use chrono::Local;
use clap::Subcommand;

use crate::config::paths::BackupPaths;
use crate::config::settings::Settings;
use crate::error::BackupResult;

use super::run::report_generator;

/// Report management subcommands
#[derive(Subcommand)]
pub enum ReportsCommands {
    /// List report files, newest first
    List {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Delete all but the newest reports
    Prune {
        /// Number of reports to keep (defaults to report.keep in config.json)
        #[arg(short, long)]
        keep: Option<usize>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a reports command
pub fn handle_reports_command(
    paths: &BackupPaths,
    settings: &Settings,
    cmd: ReportsCommands,
) -> BackupResult<()> {
    let generator = report_generator(paths, settings);

    match cmd {
        ReportsCommands::List { verbose } => {
            let reports = generator.list_reports()?;

            if reports.is_empty() {
                println!("No reports found in {}", generator.reports_dir().display());
                println!("Create one with: remote-backup report");
                return Ok(());
            }

            println!("Backup Reports");
            println!("==============");
            println!();

            let now = Local::now().naive_local();
            for (i, report) in reports.iter().enumerate() {
                let age_str = format_duration(now.signed_duration_since(report.created_at));

                if verbose {
                    println!(
                        "{}. {}\n   Created: {}\n   Size: {}\n   Age: {}\n",
                        i + 1,
                        report.filename,
                        report.created_at.format("%Y-%m-%d %H:%M:%S"),
                        format_size(report.size_bytes),
                        age_str,
                    );
                } else {
                    println!(
                        "  {}. {} ({} ago, {})",
                        i + 1,
                        report.filename,
                        age_str,
                        format_size(report.size_bytes),
                    );
                }
            }

            println!();
            println!("Total: {} report(s)", reports.len());
        }

        ReportsCommands::Prune { keep, force } => {
            let keep = keep.unwrap_or(settings.report.keep);
            let reports = generator.list_reports()?;
            let to_delete = reports.len().saturating_sub(keep);

            if to_delete == 0 {
                println!("No reports to prune.");
                println!("Keeping up to {} report(s); you have {}.", keep, reports.len());
                return Ok(());
            }

            println!("Prune Summary");
            println!("=============");
            println!("Keep newest:   {}", keep);
            println!("Current:       {}", reports.len());
            println!("To be deleted: {}", to_delete);
            println!();

            if !force {
                println!("To delete old reports, run again with --force flag:");
                println!("  remote-backup reports prune --keep {} --force", keep);
                return Ok(());
            }

            let deleted = generator.enforce_retention(keep)?;
            println!("Deleted {} report(s).", deleted.len());
        }
    }

    Ok(())
}

/// Format a duration in human-readable form
fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    format!("{}d", hours / 24)
}

/// Format a file size in human-readable form
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(chrono::Duration::seconds(42)), "42s");
        assert_eq!(format_duration(chrono::Duration::minutes(5)), "5m");
        assert_eq!(format_duration(chrono::Duration::hours(3)), "3h");
        assert_eq!(format_duration(chrono::Duration::days(9)), "9d");
        assert_eq!(format_duration(chrono::Duration::seconds(-5)), "0s");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
