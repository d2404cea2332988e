//! External process execution
//!
//! The runner talks to the sync program through [`ProcessRunner`], so tests can
//! substitute canned exit codes and output.

use std::ffi::OsString;
use std::io;
use std::process::Command;

/// Captured result of a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// Exit code 0
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs a program to completion and captures its output
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<ProcessOutput>;
}

/// Runs programs with `std::process::Command`, blocking until they exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<ProcessOutput> {
        let output = Command::new(program).args(args).output()?;

        Ok(ProcessOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_only_on_zero() {
        let mut output = ProcessOutput {
            status: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(output.success());

        output.status = Some(23);
        assert!(!output.success());

        output.status = None;
        assert!(!output.success());
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let result = SystemRunner.run("remote-backup-no-such-program", &[]);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_streams_and_status() {
        let args = vec![
            OsString::from("-c"),
            OsString::from("echo out; echo err >&2; exit 3"),
        ];
        let output = SystemRunner.run("sh", &args).unwrap();

        assert_eq!(output.status, Some(3));
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }
}
