//! Sink that forwards entries to `tracing`

use super::{LogEntry, LogSink, Operation};

/// Emits every entry as a tracing event at a level matching its operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, entry: LogEntry) {
        let LogEntry {
            folder,
            operation,
            message,
            ..
        } = entry;

        match operation {
            Operation::Copy => tracing::debug!(%folder, %operation, "{message}"),
            Operation::Sync => tracing::info!(%folder, %operation, "{message}"),
            Operation::CopyWarning => tracing::warn!(%folder, %operation, "{message}"),
            Operation::SyncError | Operation::ConfigError | Operation::Error => {
                tracing::error!(%folder, %operation, "{message}")
            }
        }
    }
}
