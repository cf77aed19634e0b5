//! Configuration loading
//!
//! The config is a single TOML file, by default at
//! `~/.config/syncAuto/config.toml`. It is created with an empty `[folders]`
//! table on first run. Once loaded the folder mapping is never modified.

mod manifest;
mod store;

pub use manifest::{DEFAULT_MAX_CONCURRENT_FOLDERS, FolderSpec, Manifest, Settings};
pub use store::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, default_config_path, default_log_path, ensure_config,
};
