//! Bounded-concurrency run over all configured folders
//!
//! Each folder runs in its own task. A task must hold a permit from the
//! shared pool for the whole time its folder is being processed, including
//! the destination fan-out, so at most `max_concurrent_folders` folders are
//! active at once. The permit is a guard and is released when the task ends,
//! whether the folder finished, failed, or panicked. Dropping the `run`
//! future aborts every folder task along with the destination syncs it owns.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::{DEFAULT_MAX_CONCURRENT_FOLDERS, FolderSpec};
use crate::processor::{FolderLog, FolderProcessor};
use crate::sink::{LogSink, Operation};
use crate::summary::{RunSummary, Tally};
use syncauto_remote::RemoteSync;

/// Options for one orchestrator run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Capacity of the folder-level permit pool; values below 1 are raised to 1
    pub max_concurrent_folders: usize,
    /// Log intended work without copying or invoking the sync tool
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_concurrent_folders: DEFAULT_MAX_CONCURRENT_FOLDERS,
            dry_run: false,
        }
    }
}

/// Drives a single pass over every folder.
pub struct Orchestrator {
    sink: Arc<dyn LogSink>,
    remote: Arc<dyn RemoteSync>,
    options: RunOptions,
}

impl Orchestrator {
    pub fn new(sink: Arc<dyn LogSink>, remote: Arc<dyn RemoteSync>, options: RunOptions) -> Self {
        Self {
            sink,
            remote,
            options,
        }
    }

    /// Process every folder and wait for all of them.
    ///
    /// Never fails; per-folder problems are logged. The returned summary
    /// counts the entries recorded during this run.
    pub async fn run(&self, folders: &BTreeMap<String, FolderSpec>) -> RunSummary {
        let capacity = self
            .options
            .max_concurrent_folders
            .clamp(1, Semaphore::MAX_PERMITS);
        let tally = Arc::new(Tally::new(Arc::clone(&self.sink)));
        let tally_sink: Arc<dyn LogSink> = tally.clone();
        let processor = Arc::new(
            FolderProcessor::new(Arc::clone(&tally_sink), Arc::clone(&self.remote))
                .with_dry_run(self.options.dry_run),
        );
        let pool = Arc::new(Semaphore::new(capacity));

        tracing::info!(
            folders = folders.len(),
            capacity,
            dry_run = self.options.dry_run,
            "Starting sync run"
        );

        let mut tasks = JoinSet::new();
        for (name, spec) in folders {
            let name = name.clone();
            let spec = spec.clone();
            let processor = Arc::clone(&processor);
            let pool = Arc::clone(&pool);
            let log = FolderLog::new(Arc::clone(&tally_sink), &name);

            tasks.spawn(async move {
                let _permit = match pool.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        log.record(Operation::Error, format!("Error processing folder: {e}"));
                        return;
                    }
                };
                tracing::debug!(folder = %name, "Folder started");

                let folder = name.clone();
                // Owned by this task: cancelling the run aborts the worker too.
                let mut worker = JoinSet::new();
                worker.spawn(async move { processor.process(&name, &spec).await });
                if let Some(Err(e)) = worker.join_next().await {
                    log.record(Operation::Error, format!("Error processing folder: {e}"));
                }

                tracing::debug!(folder = %folder, "Folder finished");
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Folder task aborted");
            }
        }

        let summary = tally.summary(folders.len());
        tracing::info!(%summary, "Sync run finished");
        summary
    }
}
