//! Sync tool discovery
//!
//! The tool is looked up on `PATH` first, then in a fixed install directory.
//! A value containing a path separator is treated as an explicit path and
//! only checked in place.

use std::path::{Path, PathBuf};

/// Executable used when none is configured
pub const DEFAULT_TOOL: &str = "rclone";

/// Install location checked when the tool is not on `PATH`
pub const FALLBACK_INSTALL_DIR: &str = "/usr/local/bin";

/// Resolve `tool` to an executable path.
///
/// Returns `None` when nothing executable was found.
pub fn locate_tool(tool: &str, fallback_dir: &Path) -> Option<PathBuf> {
    if tool.is_empty() {
        return None;
    }

    let candidate = Path::new(tool);
    if candidate.is_absolute() || candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    if let Ok(path) = which::which(tool) {
        return Some(path);
    }

    let installed = fallback_dir.join(tool);
    is_executable(&installed).then_some(installed)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
