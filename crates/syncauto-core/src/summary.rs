//! Run totals

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::sink::{LogEntry, LogSink, Operation};

/// Counts of log entries by operation for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Folders dispatched
    pub folders: usize,
    /// Entries recorded per operation
    pub counts: BTreeMap<Operation, usize>,
}

impl RunSummary {
    pub fn count(&self, operation: Operation) -> usize {
        self.counts.get(&operation).copied().unwrap_or(0)
    }

    /// Entries that mark a destination or folder as failed.
    pub fn failures(&self) -> usize {
        self.counts
            .iter()
            .filter(|(op, _)| op.is_failure())
            .map(|(_, n)| n)
            .sum()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} folder{}",
            self.folders,
            if self.folders == 1 { "" } else { "s" }
        )?;
        for (op, n) in &self.counts {
            write!(f, ", {n} {op}")?;
        }
        Ok(())
    }
}

/// Sink wrapper that counts entries before forwarding them.
pub(crate) struct Tally {
    inner: Arc<dyn LogSink>,
    counts: Mutex<BTreeMap<Operation, usize>>,
}

impl Tally {
    pub(crate) fn new(inner: Arc<dyn LogSink>) -> Self {
        Self {
            inner,
            counts: Mutex::new(BTreeMap::new()),
        }
    }

    pub(crate) fn summary(&self, folders: usize) -> RunSummary {
        let counts = self.counts.lock().unwrap_or_else(|e| e.into_inner()).clone();
        RunSummary { folders, counts }
    }
}

impl LogSink for Tally {
    fn record(&self, entry: LogEntry) {
        *self
            .counts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(entry.operation)
            .or_insert(0) += 1;
        self.inner.record(entry);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}
