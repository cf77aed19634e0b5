//! Static validation of a loaded config
//!
//! Runs the same resolution and parsing the processor would, without copying
//! or syncing anything, and reports what would go wrong.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::Manifest;
use syncauto_fs::{ensure_disjoint, resolve_path};
use syncauto_remote::{Destination, ToolInvoker};

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single problem found in the config
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Folder the problem belongs to; `None` for run-wide problems
    pub folder: Option<String>,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(folder: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            folder: folder.map(String::from),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(folder: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            folder: folder.map(String::from),
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Result of [`check_manifest`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub folders: usize,
    pub destinations: usize,
    /// Resolved sync tool, if found
    pub tool: Option<PathBuf>,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }
}

/// Check every folder in `manifest` and the sync tool used by `invoker`.
pub fn check_manifest(manifest: &Manifest, invoker: &ToolInvoker) -> CheckReport {
    let mut report = CheckReport {
        folders: manifest.folders.len(),
        ..CheckReport::default()
    };

    match invoker.locate() {
        Ok(path) => report.tool = Some(path),
        Err(e) => report.findings.push(Finding::error(None, e.to_string())),
    }

    if let Err(e) = manifest.settings.validate() {
        report.findings.push(Finding::error(None, e.to_string()));
    }

    let mut targets: BTreeMap<Destination, Vec<&str>> = BTreeMap::new();

    for (name, spec) in &manifest.folders {
        let folder = Some(name.as_str());

        if spec.source.trim().is_empty() {
            report
                .findings
                .push(Finding::error(folder, "No source path configured"));
        } else {
            match resolve_path(&spec.source) {
                Ok(source) if !source.exists() && spec.mirror_source().is_none() => {
                    report.findings.push(Finding::warning(
                        folder,
                        format!("Source '{}' does not exist", source.display()),
                    ));
                }
                Ok(_) => {}
                Err(e) => report.findings.push(Finding::error(folder, e.to_string())),
            }
        }

        if let Some(mirror) = spec.mirror_source() {
            match resolve_path(mirror) {
                Ok(path) if !path.exists() => report.findings.push(Finding::warning(
                    folder,
                    format!("Mirror source '{}' does not exist", path.display()),
                )),
                Ok(path) => {
                    if !spec.source.trim().is_empty()
                        && let Ok(source) = resolve_path(&spec.source)
                        && let Err(e) = ensure_disjoint(&path, &source)
                    {
                        report.findings.push(Finding::error(folder, e.to_string()));
                    }
                }
                Err(e) => report.findings.push(Finding::warning(folder, e.to_string())),
            }
        }

        if spec.destinations.is_empty() {
            report
                .findings
                .push(Finding::warning(folder, "No destinations configured"));
        }

        for raw in &spec.destinations {
            match Destination::parse(raw) {
                Ok(destination) => {
                    report.destinations += 1;
                    targets.entry(destination).or_default().push(name);
                }
                Err(e) => report.findings.push(Finding::error(folder, e.to_string())),
            }
        }
    }

    for (destination, users) in targets.into_iter().filter(|(_, users)| users.len() > 1) {
        report.findings.push(Finding::warning(
            None,
            format!(
                "Destination '{}' is targeted more than once ({}); concurrent syncs to it are not coordinated",
                destination,
                users.join(", ")
            ),
        ));
    }

    report
}
