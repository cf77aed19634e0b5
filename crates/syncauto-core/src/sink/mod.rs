//! Operational log
//!
//! Every terminal outcome of a copy or sync becomes a [`LogEntry`] handed to
//! a [`LogSink`]. Sinks are injected into the orchestrator; nothing here is
//! global.

mod entry;
mod file;
mod trace;

use std::sync::Arc;

pub use entry::{LogEntry, Operation};
pub use file::FileSink;
pub use trace::TracingSink;

/// Receiver of log entries.
///
/// `record` is fire-and-forget: a sink that cannot persist an entry reports
/// the problem through `tracing` and carries on.
pub trait LogSink: Send + Sync {
    fn record(&self, entry: LogEntry);

    /// Push buffered entries to durable storage.
    fn flush(&self) {}
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn record(&self, entry: LogEntry) {
        (**self).record(entry)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn record(&self, entry: LogEntry) {
        (**self).record(entry)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

/// Fans each entry out to several sinks.
#[derive(Default)]
pub struct Tee {
    sinks: Vec<Box<dyn LogSink>>,
}

impl Tee {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl LogSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }
}

impl LogSink for Tee {
    fn record(&self, entry: LogEntry) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.record(entry.clone());
            }
            last.record(entry);
        }
    }

    fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<LogEntry>>);

    impl LogSink for Collect {
        fn record(&self, entry: LogEntry) {
            self.0.lock().unwrap().push(entry);
        }
    }

    #[test]
    fn test_tee_delivers_to_every_sink() {
        let a = Arc::new(Collect::default());
        let b = Arc::new(Collect::default());
        let tee = Tee::new().with(a.clone()).with(b.clone());

        tee.record(LogEntry::new("docs", Operation::Sync, "ok"));

        assert_eq!(a.0.lock().unwrap().len(), 1);
        assert_eq!(b.0.lock().unwrap()[0].operation, Operation::Sync);
    }

    #[test]
    fn test_empty_tee_is_noop() {
        Tee::new().record(LogEntry::new("docs", Operation::Copy, "x"));
    }
}
