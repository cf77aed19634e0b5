//! Append-only log file sink

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{LogEntry, LogSink};
use crate::{Error, Result};

/// Writes one line per entry to a log file opened in append mode.
///
/// Lines are written whole under a lock so concurrent folders never
/// interleave within a line.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open (creating if needed) the log file and its parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::io(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn record(&self, entry: LogEntry) {
        let line = format!("{entry}\n");
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = file.write_all(line.as_bytes()) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to write log entry");
        }
    }

    fn flush(&self) {
        let file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = file.sync_data() {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to flush log file");
        }
    }
}
