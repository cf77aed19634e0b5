//! Log entries produced by folder processing

use std::fmt;

use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;

/// What kind of outcome an entry reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// A file was mirrored
    Copy,
    /// The mirror step failed; syncing continued
    CopyWarning,
    /// A destination was synced
    Sync,
    /// A destination failed to sync
    SyncError,
    /// A destination string was malformed and skipped
    ConfigError,
    /// The folder could not be processed
    Error,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Self::Copy,
        Self::CopyWarning,
        Self::Sync,
        Self::SyncError,
        Self::ConfigError,
        Self::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Copy => "COPY",
            Self::CopyWarning => "COPY_WARNING",
            Self::Sync => "SYNC",
            Self::SyncError => "SYNC_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Error => "ERROR",
        }
    }

    /// Whether the entry should make the run count as failed.
    ///
    /// A mirror warning does not.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::SyncError | Self::ConfigError | Self::Error)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single timestamped outcome for a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub folder: String,
    pub operation: Operation,
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(folder: impl Into<String>, operation: Operation, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            folder: folder.into(),
            operation,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}] {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
            self.folder,
            self.operation,
            self.message
        )
    }
}
