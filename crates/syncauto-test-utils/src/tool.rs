//! Fake sync executable
//!
//! Writes a small `/bin/sh` script that appends its arguments to a log file
//! and exits with a chosen status, so the real `ToolInvoker` can be exercised
//! without rclone.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway executable plus the file it logs invocations to.
pub struct FakeTool {
    _dir: TempDir,
    path: PathBuf,
    calls: PathBuf,
}

impl FakeTool {
    /// Exits 0 and prints a line to stdout.
    pub fn succeeding() -> Self {
        Self::with_body("echo \"transferred $2 -> $3\"\nexit 0")
    }

    /// Prints to both streams and exits with `code`.
    pub fn failing(code: i32) -> Self {
        Self::with_body(&format!(
            "echo \"partial transfer\"\necho \"remote $3 unreachable\" >&2\nexit {code}"
        ))
    }

    /// Never exits on its own.
    pub fn hanging() -> Self {
        Self::with_body("exec sleep 30")
    }

    /// Succeeds for targets starting with `prefix`, fails with 1 otherwise.
    pub fn succeeding_for(prefix: &str) -> Self {
        Self::with_body(&format!(
            "case \"$3\" in\n  {prefix}*) exit 0 ;;\n  *) echo \"rejected $3\" >&2; exit 1 ;;\nesac"
        ))
    }

    fn with_body(body: &str) -> Self {
        let dir = TempDir::new().expect("create fake tool dir");
        let path = dir.path().join("rclone");
        let calls = dir.path().join("calls.log");

        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n{}\n",
            calls.display(),
            body
        );
        fs::write(&path, script).expect("write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake tool");

        Self {
            _dir: dir,
            path,
            calls,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path as a string, for configs and CLI flags.
    pub fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    /// Argument lines of every invocation so far, sorted.
    pub fn invocations(&self) -> Vec<String> {
        let mut lines: Vec<String> = fs::read_to_string(&self.calls)
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect();
        lines.sort();
        lines
    }
}
