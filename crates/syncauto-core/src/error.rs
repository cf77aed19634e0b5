//! Error types for syncauto-core

use std::path::PathBuf;

/// Result type for syncauto-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can stop a run before any folder is processed
///
/// Per-folder and per-destination failures never surface here; they are
/// recorded as log entries instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("Error reading {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A setting has a value outside its allowed range
    #[error("Invalid setting {key}: {message}")]
    InvalidSetting { key: String, message: String },

    /// Home directory needed for a default path is unknown
    #[error("Could not determine home directory for {purpose}")]
    HomeNotFound { purpose: String },

    /// I/O error with the path it happened on
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error from syncauto-fs
    #[error(transparent)]
    Fs(#[from] syncauto_fs::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
