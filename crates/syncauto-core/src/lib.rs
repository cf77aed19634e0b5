//! Core orchestration layer for syncauto
//!
//! This crate ties the filesystem and remote layers together:
//!
//! - **Configuration**: loading and bootstrapping `config.toml`
//! - **Log sink**: structured per-folder outcome entries
//! - **FolderProcessor**: mirror step plus concurrent per-destination syncs
//! - **Orchestrator**: one pass over all folders under a fixed concurrency cap
//! - **Check**: static validation of a config without touching remotes
//!
//! # Architecture
//!
//! ```text
//!                  syncauto-cli
//!                       |
//!                 syncauto-core
//!                       |
//!          +------------+------------+
//!          |                         |
//!     syncauto-fs             syncauto-remote
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod processor;
pub mod sink;
pub mod summary;

pub use check::{CheckReport, Finding, Severity, check_manifest};
pub use config::{FolderSpec, Manifest, Settings};
pub use error::{Error, Result};
pub use orchestrator::{Orchestrator, RunOptions};
pub use processor::FolderProcessor;
pub use sink::{FileSink, LogEntry, LogSink, Operation, Tee, TracingSink};
pub use summary::RunSummary;
