//! Manifest parsing for config.toml files
//!
//! ```toml
//! [settings]
//! max_concurrent_folders = 5
//!
//! [folders.documents]
//! originalSource = "~/Documents"
//! source = "~/Sync/documents"
//! destination = ["googledrive:documents", "onedrive:documents"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};
use syncauto_remote::DEFAULT_TOOL;

/// Number of folders processed at the same time unless configured otherwise
pub const DEFAULT_MAX_CONCURRENT_FOLDERS: usize = 5;

fn default_max_concurrent_folders() -> usize {
    DEFAULT_MAX_CONCURRENT_FOLDERS
}

fn default_sync_tool() -> String {
    DEFAULT_TOOL.to_string()
}

/// Run-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Capacity of the folder-level concurrency pool
    #[serde(default = "default_max_concurrent_folders")]
    pub max_concurrent_folders: usize,

    /// Sync executable, by name (looked up on PATH) or by path
    #[serde(default = "default_sync_tool")]
    pub sync_tool: String,

    /// Per-invocation limit for the sync tool; unset means wait forever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_timeout_secs: Option<u64>,

    /// Operational log location; `~/` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_concurrent_folders: default_max_concurrent_folders(),
            sync_tool: default_sync_tool(),
            sync_timeout_secs: None,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn sync_timeout(&self) -> Option<Duration> {
        self.sync_timeout_secs.map(Duration::from_secs)
    }

    /// Reject values the orchestrator cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_folders == 0 {
            return Err(Error::InvalidSetting {
                key: "max_concurrent_folders".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.sync_timeout_secs == Some(0) {
            return Err(Error::InvalidSetting {
                key: "sync_timeout_secs".into(),
                message: "must be at least 1 when set".into(),
            });
        }
        Ok(())
    }
}

/// One named folder: a local tree and where it should be synced to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSpec {
    /// Optional tree copied into `source` before syncing
    #[serde(
        rename = "originalSource",
        alias = "mirror_source",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mirror_source: Option<String>,

    /// Local tree that is synced to every destination
    #[serde(default)]
    pub source: String,

    /// Raw `remoteType:remotePath` strings, parsed when the folder is processed
    #[serde(rename = "destination", alias = "destinations", default)]
    pub destinations: Vec<String>,
}

impl FolderSpec {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_mirror_source(mut self, mirror_source: impl Into<String>) -> Self {
        self.mirror_source = Some(mirror_source.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destinations.push(destination.into());
        self
    }

    /// The mirror source, treating an empty string as unset.
    pub fn mirror_source(&self) -> Option<&str> {
        self.mirror_source.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Parsed config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub settings: Settings,

    /// Folders keyed by name; iteration is in name order
    #[serde(default)]
    pub folders: BTreeMap<String, FolderSpec>,
}

impl Manifest {
    /// Parse a manifest from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Read and parse a manifest file.
    ///
    /// Settings are not validated here; callers validate after applying
    /// their own overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::io(path, e)
            }
        })?;

        let manifest = Self::parse(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), folders = manifest.folders.len(), "Loaded config");
        Ok(manifest)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
