//! End-to-end tests for the remote-backup binary
//!
//! Each test gets its own config directory. On Unix the sync program is
//! replaced with `true` or a short `sh` script so nothing leaves the machine.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn remote_backup(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("remote-backup").unwrap();
    cmd.env("REMOTE_BACKUP_HOME", home);
    cmd
}

fn write_config(home: &Path, source: &Path, program: &str) {
    write_config_with_flags(home, source, program, &["-avz"]);
}

fn write_config_with_flags(home: &Path, source: &Path, program: &str, flags: &[&str]) {
    let config = json!({
        "source_directory": source,
        "remote": { "server": "tester@localhost", "directory": "/tmp/remote-backup-test" },
        "sync": { "program": program, "flags": flags },
    });
    fs::write(home.join("config.json"), config.to_string()).unwrap();
}

fn report_files(home: &Path) -> Vec<String> {
    let dir = home.join("reports");
    if !dir.exists() {
        return Vec::new();
    }
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect()
}

#[test]
fn missing_source_is_logged_and_exits_zero() {
    let home = TempDir::new().unwrap();
    let source = home.path().join("nowhere");
    write_config(home.path(), &source, "rsync");

    remote_backup(home.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Source directory does not exist"));

    let log = fs::read_to_string(home.path().join("backup.log")).unwrap();
    assert!(log.contains(" - ERROR - Backup operation failed with exception: Source directory does not exist"));
    assert!(log.contains(&source.display().to_string()));

    let reports = report_files(home.path());
    assert_eq!(reports.len(), 1);
    assert!(reports[0].starts_with("backup_report_"));
    assert!(!reports[0].contains(':'));
}

#[test]
fn strict_flag_turns_failure_into_exit_code() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), &home.path().join("nowhere"), "rsync");

    remote_backup(home.path())
        .args(["--strict", "--quiet", "backup"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn successful_sync_logs_success() {
    let home = TempDir::new().unwrap();
    let source = TempDir::new().unwrap();
    write_config(home.path(), source.path(), "true");

    remote_backup(home.path())
        .args(["--strict", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup completed successfully."))
        .stdout(predicate::str::contains("Backup report generated:"));

    let log = fs::read_to_string(home.path().join("backup.log")).unwrap();
    assert!(log.contains(" - INFO - Backup completed successfully."));
}

#[cfg(unix)]
#[test]
fn failing_sync_logs_error() {
    let home = TempDir::new().unwrap();
    let source = TempDir::new().unwrap();
    // Source and destination land in $0 and $1 of the script
    write_config_with_flags(
        home.path(),
        source.path(),
        "sh",
        &["-c", "echo boom >&2; exit 2"],
    );

    remote_backup(home.path())
        .arg("backup")
        .assert()
        .success()
        .stderr(predicate::str::contains("Backup failed."))
        .stderr(predicate::str::contains("boom"));

    let log = fs::read_to_string(home.path().join("backup.log")).unwrap();
    assert!(log.contains(" - ERROR - Backup failed."));
    assert!(log.contains(" - ERROR - boom"));
    assert!(report_files(home.path()).is_empty());
}

#[test]
fn report_without_log_does_not_crash() {
    let home = TempDir::new().unwrap();

    remote_backup(home.path())
        .arg("report")
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to generate backup report"));

    assert!(report_files(home.path()).is_empty());
}

#[test]
fn init_then_config_shows_settings() {
    let home = TempDir::new().unwrap();

    remote_backup(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));
    assert!(home.path().join("config.json").exists());

    remote_backup(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings already exist"));

    remote_backup(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "rsync -avz /path/to/source/directory user@remote-server-address:/path/to/remote/directory",
        ));
}

#[test]
fn reports_prune_keeps_newest() {
    let home = TempDir::new().unwrap();
    let reports = home.path().join("reports");
    fs::create_dir_all(&reports).unwrap();
    for second in 0..4 {
        let name = format!("backup_report_2025-01-01_00_00_0{}.txt", second);
        fs::write(reports.join(name), "Backup Report\n").unwrap();
    }

    remote_backup(home.path())
        .args(["reports", "prune", "--keep", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("To be deleted: 3"));
    assert_eq!(report_files(home.path()).len(), 4);

    remote_backup(home.path())
        .args(["reports", "prune", "--keep", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 3 report(s)."));

    assert_eq!(
        report_files(home.path()),
        vec!["backup_report_2025-01-01_00_00_03.txt".to_string()]
    );

    remote_backup(home.path())
        .args(["reports", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1 report(s)"));
}
