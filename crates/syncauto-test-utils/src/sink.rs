//! In-memory log sink

use std::sync::Mutex;

use syncauto_core::{LogEntry, LogSink, Operation};

/// Keeps every recorded entry for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries in arrival order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of entries with the given operation across all folders.
    pub fn count(&self, operation: Operation) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.operation == operation)
            .count()
    }

    /// Number of entries for `folder` with the given operation.
    pub fn count_for(&self, folder: &str, operation: Operation) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.folder == folder && e.operation == operation)
            .count()
    }

    /// Messages of entries with the given operation.
    pub fn messages(&self, operation: Operation) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.operation == operation)
            .map(|e| e.message.clone())
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn record(&self, entry: LogEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}
