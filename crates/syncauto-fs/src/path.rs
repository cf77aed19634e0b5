//! Home-directory shorthand expansion

use std::path::{Path, PathBuf};

use crate::{Error, Result};

const HOME_MARKER: char = '~';

/// Expand a leading `~/` into the current user's home directory.
///
/// Paths without the shorthand are returned unchanged and never fail.
/// A bare `~` or `~user/...` is not expanded.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    resolve_path_with(path, dirs::home_dir().as_deref())
}

/// Same as [`resolve_path`] but with an explicit home directory.
///
/// `home` is only consulted when the shorthand is present.
pub fn resolve_path_with(path: &str, home: Option<&Path>) -> Result<PathBuf> {
    let Some(rest) = strip_home_marker(path) else {
        return Ok(PathBuf::from(path));
    };

    let home = home.ok_or_else(|| Error::HomeDirectoryUnavailable {
        path: path.to_string(),
    })?;

    Ok(home.join(rest))
}

/// Returns the remainder after `~/` (or `~\` on Windows).
fn strip_home_marker(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(HOME_MARKER)?;
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if std::path::is_separator(c) => Some(chars.as_str()),
        _ => None,
    }
}
