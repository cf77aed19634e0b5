//! Check command implementation

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use syncauto_core::{CheckReport, Manifest, Severity, check_manifest};
use syncauto_remote::ToolInvoker;

use super::config_path;
use crate::cli::CheckArgs;
use crate::error::Result;

/// Validate the config and the sync tool without touching any folder.
pub fn run_check(config: Option<&Path>, args: &CheckArgs) -> Result<ExitCode> {
    let path = config_path(config)?;
    let manifest = Manifest::load(&path)?;

    let tool = args
        .tool
        .clone()
        .unwrap_or_else(|| manifest.settings.sync_tool.clone());
    let report = check_manifest(&manifest, &ToolInvoker::new(tool));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&path, &report);
    }

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_report(path: &Path, report: &CheckReport) {
    println!("{}", "Config Check".bold());
    println!();
    println!("{}:        {}", "Config".dimmed(), path.display());
    println!(
        "{}:       {} folder(s), {} destination(s)",
        "Folders".dimmed(),
        report.folders,
        report.destinations
    );
    match &report.tool {
        Some(tool) => println!("{}:     {}", "Sync tool".dimmed(), tool.display()),
        None => println!("{}:     {}", "Sync tool".dimmed(), "not found".red()),
    }
    println!();

    if report.findings.is_empty() {
        println!("{}", "OK".green().bold());
        return;
    }

    for finding in &report.findings {
        let label = match finding.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        match &finding.folder {
            Some(folder) => println!("  {label} [{}] {}", folder.cyan(), finding.message),
            None => println!("  {label} {}", finding.message),
        }
    }
    println!();
    println!(
        "{} error(s), {} warning(s)",
        report.errors().count(),
        report.warnings().count()
    );
}
