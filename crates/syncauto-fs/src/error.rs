//! Error types for syncauto-fs

use std::path::PathBuf;

/// Result type for syncauto-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving paths or copying trees
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot expand '{path}': home directory is unavailable")]
    HomeDirectoryUnavailable { path: String },

    #[error("Source {path} not found: {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot mirror {from} into {into}: destination overlaps the source")]
    Overlap { from: PathBuf, into: PathBuf },

    #[error("Error creating directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error opening source file {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating destination file {path}: {source}")]
    DestinationCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error copying {from} to {to}: {source}")]
    CopyIo {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error syncing destination file {path}: {source}")]
    DestinationSync {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

