//! In-process `RemoteSync` double

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use syncauto_remote::{Destination, Error, RemoteSync, Result, SyncOutput};

/// Records calls and tracks how many were in flight at the same time.
///
/// Destinations whose remote type was registered with [`failing_type`]
/// return a `ToolNotFound` error; those registered with [`panicking_type`]
/// panic inside the call.
///
/// [`failing_type`]: ProbeRemote::failing_type
/// [`panicking_type`]: ProbeRemote::panicking_type
#[derive(Debug, Default)]
pub struct ProbeRemote {
    delay: Duration,
    failing: HashSet<String>,
    panicking: HashSet<String>,
    calls: Mutex<Vec<(PathBuf, Destination)>>,
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl ProbeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every call for `delay` before returning.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing_type(mut self, remote_type: &str) -> Self {
        self.failing.insert(remote_type.to_string());
        self
    }

    pub fn panicking_type(mut self, remote_type: &str) -> Self {
        self.panicking.insert(remote_type.to_string());
        self
    }

    /// All calls in start order.
    pub fn calls(&self) -> Vec<(PathBuf, Destination)> {
        self.calls.lock().unwrap().clone()
    }

    /// Targets of all calls, sorted, as `type:path` strings.
    pub fn targets(&self) -> Vec<String> {
        let mut targets: Vec<String> = self
            .calls()
            .into_iter()
            .map(|(_, d)| d.to_string())
            .collect();
        targets.sort();
        targets
    }

    /// Highest number of calls that were in flight simultaneously.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RemoteSync for ProbeRemote {
    async fn sync(&self, local: &Path, destination: &Destination) -> Result<SyncOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((local.to_path_buf(), destination.clone()));

        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = InFlight(&self.active);
        self.peak.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.panicking.contains(&destination.remote_type) {
            panic!("probe panic for {destination}");
        }
        if self.failing.contains(&destination.remote_type) {
            return Err(Error::ToolNotFound {
                tool: "probe".into(),
                fallback: PathBuf::from("/nonexistent"),
            });
        }

        Ok(SyncOutput {
            tool: PathBuf::from("probe"),
            output: format!("synced {} to {destination}", local.display()),
        })
    }
}
