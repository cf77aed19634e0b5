//! Sync tool invocation

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::destination::Destination;
use crate::discovery::{DEFAULT_TOOL, FALLBACK_INSTALL_DIR, locate_tool};
use crate::error::{Error, Result};

/// Output of a successful sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutput {
    /// Executable that performed the sync
    pub tool: PathBuf,
    /// Captured stdout followed by stderr
    pub output: String,
}

/// Something that can mirror a local path into a remote target.
#[async_trait]
pub trait RemoteSync: Send + Sync {
    async fn sync(&self, local: &Path, destination: &Destination) -> Result<SyncOutput>;
}

/// Runs `<tool> sync <local> <remoteType>:<remotePath>` as a child process.
///
/// The tool is located again on every call. There is no retry; a timeout is
/// only applied when configured.
#[derive(Debug, Clone)]
pub struct ToolInvoker {
    tool: String,
    fallback_dir: PathBuf,
    timeout: Option<Duration>,
}

impl ToolInvoker {
    /// Create an invoker for the given executable name or path.
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            fallback_dir: PathBuf::from(FALLBACK_INSTALL_DIR),
            timeout: None,
        }
    }

    /// Kill the tool and report failure if it runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Directory searched when the tool is not on `PATH`.
    pub fn with_fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = dir.into();
        self
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolve the configured tool without running it.
    pub fn locate(&self) -> Result<PathBuf> {
        locate_tool(&self.tool, &self.fallback_dir).ok_or_else(|| Error::ToolNotFound {
            tool: self.tool.clone(),
            fallback: self.fallback_dir.clone(),
        })
    }
}

impl Default for ToolInvoker {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

#[async_trait]
impl RemoteSync for ToolInvoker {
    async fn sync(&self, local: &Path, destination: &Destination) -> Result<SyncOutput> {
        let tool = self.locate()?;

        tracing::debug!(
            tool = %tool.display(),
            local = %local.display(),
            target = %destination,
            "Starting sync"
        );

        let mut cmd = Command::new(&tool);
        cmd.arg("sync")
            .arg(local)
            .arg(destination.to_string())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let run = cmd.output();
        let finished = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, run)
                .await
                .map_err(|_| Error::TimedOut { after: limit })?,
            None => run.await,
        };
        let output = finished.map_err(|e| Error::Spawn {
            tool: tool.clone(),
            source: e,
        })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(SyncOutput {
                tool,
                output: combined,
            })
        } else {
            tracing::debug!(status = %output.status, target = %destination, "Sync tool failed");
            Err(Error::RemoteSyncFailed {
                status: output.status,
                output: combined,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invoker_uses_rclone() {
        let invoker = ToolInvoker::default();
        assert_eq!(invoker.tool(), "rclone");
        assert!(invoker.timeout().is_none());
    }

    #[tokio::test]
    async fn test_missing_tool_reports_not_found() {
        let temp = tempfile::TempDir::new().unwrap();
        let invoker = ToolInvoker::new("syncauto-missing-tool-e81d").with_fallback_dir(temp.path());

        let err = invoker
            .sync(temp.path(), &Destination::new("remote", "path"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ToolNotFound { .. }));
        assert!(err.to_string().contains("syncauto-missing-tool-e81d"));
    }
}
