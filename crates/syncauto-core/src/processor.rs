//! Per-folder processing
//!
//! A folder is processed in three steps:
//!
//! 1. Resolve the source path. Failure ends this folder with an `ERROR` entry.
//! 2. If a mirror source is configured, copy it into the source. Any failure
//!    is downgraded to a `COPY_WARNING` and processing continues.
//! 3. Parse every destination and sync each valid one concurrently. Malformed
//!    entries get a `CONFIG_ERROR` and are skipped.
//!
//! [`FolderProcessor::process`] returns once every destination has finished.
//! Nothing is propagated to the caller; all outcomes go to the log sink.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::config::FolderSpec;
use crate::sink::{LogEntry, LogSink, Operation};
use syncauto_fs::{copy_tree, resolve_path};
use syncauto_remote::{Destination, RemoteSync};

/// Log handle bound to one folder name.
#[derive(Clone)]
pub(crate) struct FolderLog {
    sink: Arc<dyn LogSink>,
    folder: Arc<str>,
}

impl FolderLog {
    pub(crate) fn new(sink: Arc<dyn LogSink>, folder: &str) -> Self {
        Self {
            sink,
            folder: Arc::from(folder),
        }
    }

    pub(crate) fn record(&self, operation: Operation, message: impl Into<String>) {
        self.sink
            .record(LogEntry::new(self.folder.as_ref(), operation, message));
    }
}

/// Runs the mirror step and destination fan-out for single folders.
pub struct FolderProcessor {
    sink: Arc<dyn LogSink>,
    remote: Arc<dyn RemoteSync>,
    dry_run: bool,
}

impl FolderProcessor {
    pub fn new(sink: Arc<dyn LogSink>, remote: Arc<dyn RemoteSync>) -> Self {
        Self {
            sink,
            remote,
            dry_run: false,
        }
    }

    /// Log what would happen instead of copying or invoking the sync tool.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process one folder to completion.
    pub async fn process(&self, name: &str, spec: &FolderSpec) {
        let log = FolderLog::new(Arc::clone(&self.sink), name);

        let source = match resolve_source(spec) {
            Ok(path) => path,
            Err(message) => {
                log.record(
                    Operation::Error,
                    format!("Error processing folder: {message}"),
                );
                return;
            }
        };

        if let Some(mirror) = spec.mirror_source() {
            self.mirror(&log, mirror, &source).await;
        } else {
            tracing::debug!(folder = name, "No mirror source configured");
        }

        let mut tasks = JoinSet::new();
        for raw in &spec.destinations {
            let destination = match Destination::parse(raw) {
                Ok(destination) => destination,
                Err(e) => {
                    log.record(Operation::ConfigError, e.to_string());
                    continue;
                }
            };

            if self.dry_run {
                log.record(
                    Operation::Sync,
                    format!(
                        "[dry-run] Would sync folder '{}' to '{}'",
                        source.display(),
                        destination
                    ),
                );
                continue;
            }

            let remote = Arc::clone(&self.remote);
            let log = log.clone();
            let source = source.clone();
            tasks.spawn(async move {
                sync_destination(remote.as_ref(), &log, &source, &destination).await;
            });
        }

        tracing::debug!(folder = name, destinations = tasks.len(), "Waiting for syncs");
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                log.record(Operation::Error, format!("Sync task failed: {e}"));
            }
        }
    }

    async fn mirror(&self, log: &FolderLog, raw: &str, source: &Path) {
        let resolved = resolve_path(raw);

        if self.dry_run {
            let from = match &resolved {
                Ok(path) => path.display().to_string(),
                Err(_) => raw.to_string(),
            };
            log.record(
                Operation::Copy,
                format!(
                    "[dry-run] Would mirror '{from}' into '{}'",
                    source.display()
                ),
            );
            return;
        }

        let from = match resolved {
            Ok(path) => path,
            Err(e) => {
                log.record(
                    Operation::CopyWarning,
                    format!("Warning mirroring '{raw}': {e}"),
                );
                return;
            }
        };

        let copy_log = log.clone();
        let copy_from = from.clone();
        let copy_to = source.to_path_buf();
        let copied = tokio::task::spawn_blocking(move || {
            copy_tree(&copy_from, &copy_to, |file| {
                copy_log.record(
                    Operation::Copy,
                    format!(
                        "File '{}' copied successfully to '{}'",
                        file.file_name(),
                        file.destination.display()
                    ),
                );
            })
        })
        .await;

        let failure = match copied {
            Ok(Ok(())) => return,
            Ok(Err(e)) => e.to_string(),
            Err(e) => format!("copy task failed: {e}"),
        };
        log.record(
            Operation::CopyWarning,
            format!(
                "Warning mirroring '{}' into '{}': {failure}",
                from.display(),
                source.display()
            ),
        );
    }
}

fn resolve_source(spec: &FolderSpec) -> Result<PathBuf, String> {
    if spec.source.trim().is_empty() {
        return Err("no source path configured".to_string());
    }
    resolve_path(&spec.source).map_err(|e| e.to_string())
}

async fn sync_destination(
    remote: &dyn RemoteSync,
    log: &FolderLog,
    source: &Path,
    destination: &Destination,
) {
    match remote.sync(source, destination).await {
        Ok(done) => {
            tracing::debug!(target_remote = %destination, output = %done.output.trim_end(), "Sync output");
            log.record(
                Operation::Sync,
                format!(
                    "Folder '{}' synced successfully to '{}'",
                    source.display(),
                    destination
                ),
            );
        }
        Err(e) => log.record(
            Operation::SyncError,
            format!(
                "Error syncing folder '{}' to '{}': {e}",
                source.display(),
                destination
            ),
        ),
    }
}
