//! Shared test utilities for the syncauto workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`sink`]: [`RecordingSink`] keeps every log entry in memory
//! - [`remote`]: [`ProbeRemote`] in-process `RemoteSync` that measures concurrency
//! - [`tool`]: [`FakeTool`] shell script standing in for the sync executable (unix)
//! - [`tree`]: helpers for writing fixture directory trees

pub mod remote;
pub mod sink;
#[cfg(unix)]
pub mod tool;
pub mod tree;

pub use remote::ProbeRemote;
pub use sink::RecordingSink;
#[cfg(unix)]
pub use tool::FakeTool;
pub use tree::write_tree;
