//! Remote sync invocation for syncauto
//!
//! This crate owns everything on the far side of the process boundary:
//!
//! - Parsing `remoteType:remotePath` destination strings
//! - Locating the external sync executable (`rclone` by default)
//! - Running `<tool> sync <local> <remote>` and classifying the outcome
//!
//! The [`RemoteSync`] trait is the seam the orchestrator talks to, so tests
//! can substitute an in-process fake for the real tool.

pub mod destination;
pub mod discovery;
pub mod error;
pub mod invoker;

pub use destination::{Destination, DestinationError};
pub use discovery::{DEFAULT_TOOL, FALLBACK_INSTALL_DIR, locate_tool};
pub use error::{Error, Result};
pub use invoker::{RemoteSync, SyncOutput, ToolInvoker};
