//! Error types for remote sync operations

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// Errors that can occur while invoking the sync tool
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Executable could not be found; nothing was executed
    #[error("{tool} not found in PATH or {fallback}")]
    ToolNotFound { tool: String, fallback: PathBuf },

    /// Executable was found but could not be started or waited on
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tool ran and exited with a non-zero status
    #[error("{status}\nOutput: {output}")]
    RemoteSyncFailed { status: ExitStatus, output: String },

    /// Tool did not finish within the configured limit and was killed
    #[error("timed out after {after:?}")]
    TimedOut { after: Duration },
}

/// Result type alias for remote sync operations
pub type Result<T> = std::result::Result<T, Error>;
