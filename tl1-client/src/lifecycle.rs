//! Lifecycle event log
//!
//! Append-only text file recording service start/stop events, one line per
//! event: `<ctime-style timestamp> => <message>`. The file is opened for
//! every append so the signal path can write through the same sink without
//! sharing a handle with the main path.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tl1_core::{Tl1Error, Tl1Result};

/// ctime-style timestamp, e.g. `Mon Aug 24 14:03:12 2026`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Append-only lifecycle event sink
#[derive(Debug, Clone)]
pub struct LifecycleLog {
    path: PathBuf,
}

impl LifecycleLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped event line.
    ///
    /// # Errors
    /// Failure to open or write the file is `Tl1Error::LogIo`, which the
    /// entry point maps to its own exit status.
    pub fn append(&self, message: &str) -> Tl1Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(Tl1Error::LogIo)?;
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        writeln!(file, "{} => {}", stamp, message).map_err(Tl1Error::LogIo)
    }

    /// Record service startup.
    pub fn service_started(&self, app: &str, version: &str) -> Tl1Result<()> {
        self.append(&format!("{}.{} service started...", app, version))
    }

    /// Record normal service shutdown.
    pub fn service_stopped(&self, app: &str, version: &str) -> Tl1Result<()> {
        self.append(&format!("{}.{} service stopped...", app, version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_lines_append_in_order_with_timestamp_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let log = LifecycleLog::new(dir.path().join("tl1client.log"));

        log.service_started("tl1client", "0.1.0").unwrap();
        log.append("exchange complete").unwrap();
        log.service_stopped("tl1client", "0.1.0").unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("tl1client.0.1.0 service started..."));
        assert!(lines[1].ends_with("exchange complete"));
        assert!(lines[2].ends_with("tl1client.0.1.0 service stopped..."));

        for line in lines {
            let (stamp, _) = line.split_once(" => ").unwrap();
            NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).unwrap();
        }
    }

    #[test]
    fn test_unwritable_path_is_log_io_error() {
        let log = LifecycleLog::new("/nonexistent-dir/tl1client.log");
        let err = log.append("will not land").unwrap_err();
        assert!(matches!(err, Tl1Error::LogIo(_)));
        assert_eq!(err.exit_code(), tl1_core::EXIT_LOG_FAILURE);
    }
}
