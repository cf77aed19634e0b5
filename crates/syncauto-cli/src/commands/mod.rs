//! Command implementations for syncauto-cli

pub mod check;
pub mod init;
pub mod run;

use std::path::{Path, PathBuf};

use syncauto_core::config::default_config_path;

use crate::error::Result;

pub use check::run_check;
pub use init::run_init;
pub use run::run_sync;

/// `--config` / `SYNCAUTO_CONFIG`, else the default location.
fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(default_config_path()?),
    }
}
