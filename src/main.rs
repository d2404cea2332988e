use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use remote_backup::cli::{handle_reports_command, handle_run_command, ReportsCommands, RunSteps};
use remote_backup::config::{paths::BackupPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "remote-backup",
    author = "Kaylee Beyene",
    version,
    about = "Mirror a local directory to a remote host with rsync",
    long_about = "remote-backup copies a source directory to a user@host:path \
                  destination with rsync, appends the outcome to a run log, and \
                  writes a report of the log's most recent lines. With no \
                  subcommand it runs the backup and then the report."
)]
struct Cli {
    /// Directory holding config.json, the run log and reports
    #[arg(long, global = true, env = "REMOTE_BACKUP_HOME")]
    config_dir: Option<PathBuf>,

    /// Don't echo log messages to the console
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Exit with status 1 if the backup or the report fails
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the backup, then write a report
    Run,

    /// Run the backup only
    Backup,

    /// Write a report of the run log only
    Report,

    /// Report file management commands
    #[command(subcommand)]
    Reports(ReportsCommands),

    /// Write a config.json with default settings
    Init {
        /// Overwrite an existing config.json
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = match cli.config_dir {
        Some(dir) => BackupPaths::with_base_dir(dir),
        None => BackupPaths::new()?,
    };

    let steps = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => RunSteps::All,
        Commands::Backup => RunSteps::BackupOnly,
        Commands::Report => RunSteps::ReportOnly,
        Commands::Reports(cmd) => {
            let settings = Settings::load_or_create(&paths)?;
            handle_reports_command(&paths, &settings, cmd)?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Init { force } => {
            init_settings(&paths, force)?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Config => {
            let settings = Settings::load_or_create(&paths)?;
            print_config(&paths, &settings);
            return Ok(ExitCode::SUCCESS);
        }
    };

    let settings = Settings::load_or_create(&paths)?;
    let strict = cli.strict || settings.strict_exit;

    let summary = handle_run_command(&paths, &settings, steps, cli.quiet);

    if strict && !summary.succeeded() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn init_settings(paths: &BackupPaths, force: bool) -> Result<()> {
    if paths.is_initialized() && !force {
        println!(
            "Settings already exist at: {}",
            paths.settings_file().display()
        );
        println!("Run 'remote-backup init --force' to overwrite them.");
        return Ok(());
    }

    Settings::default().save(paths)?;
    println!("Wrote default settings to: {}", paths.settings_file().display());
    println!("Edit source_directory and remote before running a backup.");
    Ok(())
}

fn print_config(paths: &BackupPaths, settings: &Settings) {
    println!("remote-backup Configuration");
    println!("===========================");
    println!("Config directory:  {}", paths.base_dir().display());
    println!(
        "Settings file:     {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created, using defaults)" }
    );
    println!(
        "Log file:          {}",
        paths.log_file(&settings.log_file).display()
    );
    println!("Reports directory: {}", paths.reports_dir().display());
    println!();
    println!("Settings:");
    println!("  Source:        {}", settings.source_directory.display());
    println!("  Destination:   {}", settings.remote_target());
    println!("  Command:       {}", settings.sync_command().display());
    println!("  Report lines:  {}", settings.report.lines);
    println!("  Reports kept:  {}", settings.report.keep);
    println!("  Strict exit:   {}", settings.strict_exit);
}
