//! Default locations and first-run bootstrapping

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Directory under `~/.config` holding the config file
pub const CONFIG_DIR_NAME: &str = "syncAuto";
/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# syncauto configuration
#
# [settings]
# max_concurrent_folders = 5
# sync_tool = "rclone"
# sync_timeout_secs = 3600
# log_file = "~/repos/syncAuto/syncAuto.log"
#
# [folders.documents]
# originalSource = "~/Documents"            # optional, copied into source first
# source = "~/Sync/documents"
# destination = ["googledrive:documents"]   # one or more remoteType:remotePath

[folders]
"#;

fn home() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| Error::HomeNotFound {
        purpose: "default paths".into(),
    })
}

/// `~/.config/syncAuto/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    Ok(home()?
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

/// `~/repos/syncAuto/syncAuto.log`
pub fn default_log_path() -> Result<PathBuf> {
    Ok(home()?.join("repos").join("syncAuto").join("syncAuto.log"))
}

/// Write the default config to `path` unless a file is already there.
///
/// Returns `true` if a new file was created.
pub fn ensure_config(path: &Path) -> Result<bool> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "Config file already exists");
        return Ok(false);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(Error::io(path, e)),
    };
    file.write_all(DEFAULT_CONFIG.as_bytes())
        .map_err(|e| Error::io(path, e))?;

    tracing::info!(path = %path.display(), "Config file created");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Manifest;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses_empty() {
        let manifest = Manifest::parse(DEFAULT_CONFIG).unwrap();
        assert!(manifest.folders.is_empty());
        manifest.settings.validate().unwrap();
    }

    #[test]
    fn test_ensure_config_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".config/syncAuto/config.toml");

        assert!(ensure_config(&path).unwrap());
        assert!(path.is_file());
        assert!(Manifest::load(&path).unwrap().folders.is_empty());
    }

    #[test]
    fn test_ensure_config_leaves_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[folders.keep]\nsource = \"/keep\"\n").unwrap();

        assert!(!ensure_config(&path).unwrap());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("keep"));
    }

    #[test]
    fn test_default_paths_use_original_locations() {
        if dirs::home_dir().is_some() {
            let config = default_config_path().unwrap();
            assert!(config.ends_with(".config/syncAuto/config.toml"));
            let log = default_log_path().unwrap();
            assert!(log.ends_with("repos/syncAuto/syncAuto.log"));
        }
    }
}
