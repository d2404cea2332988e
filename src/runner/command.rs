//! Sync command construction
//!
//! Builds the argument vector for the external sync program from a source
//! directory and a `user@host:path` destination.

use std::ffi::OsString;
use std::path::PathBuf;

/// A `user@host:path` destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    /// `user@host`
    pub server: String,
    /// Directory on the remote host
    pub path: String,
}

impl RemoteTarget {
    pub fn new(server: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.server, self.path)
    }
}

/// A fully described sync invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCommand {
    /// Program name or path
    pub program: String,
    /// Flags placed before the positional arguments
    pub flags: Vec<String>,
    /// Local directory to copy
    pub source: PathBuf,
    /// Where it goes
    pub destination: RemoteTarget,
}

impl SyncCommand {
    /// Arguments in call order: flags, source, destination
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.flags.iter().map(OsString::from).collect();
        args.push(self.source.clone().into_os_string());
        args.push(OsString::from(self.destination.to_string()));
        args
    }

    /// Printable form of the command line
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.flags.iter().cloned());
        parts.push(self.source.display().to_string());
        parts.push(self.destination.to_string());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_command() -> SyncCommand {
        SyncCommand {
            program: "rsync".into(),
            flags: vec!["-avz".into()],
            source: PathBuf::from("/home/alice/photos"),
            destination: RemoteTarget::new("alice@nas.local", "/volume1/backup"),
        }
    }

    #[test]
    fn test_remote_target_display() {
        let target = RemoteTarget::new("user@remote-server-address", "/path/to/remote/directory");
        assert_eq!(
            target.to_string(),
            "user@remote-server-address:/path/to/remote/directory"
        );
    }

    #[test]
    fn test_args_order() {
        let args = sample_command().args();
        assert_eq!(
            args,
            vec![
                OsString::from("-avz"),
                OsString::from("/home/alice/photos"),
                OsString::from("alice@nas.local:/volume1/backup"),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample_command().display(),
            "rsync -avz /home/alice/photos alice@nas.local:/volume1/backup"
        );
    }
}
