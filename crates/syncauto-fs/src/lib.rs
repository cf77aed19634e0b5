//! Filesystem layer for syncauto
//!
//! Provides home-directory path expansion and the recursive copy engine used
//! to stage a mirror source into a folder's sync source before upload.

pub mod copy;
pub mod error;
pub mod path;

pub use copy::{CopiedFile, copy_tree, ensure_disjoint};
pub use error::{Error, Result};
pub use path::{resolve_path, resolve_path_with};
