//! Init command implementation

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use syncauto_core::config::ensure_config;

use super::config_path;
use crate::error::Result;

/// Create the config file with an empty folder table if it is missing.
pub fn run_init(config: Option<&Path>) -> Result<ExitCode> {
    let path = config_path(config)?;

    if ensure_config(&path)? {
        println!("{} {}", "Created".green().bold(), path.display());
        println!();
        println!("Add folders under {} and run {}.", "[folders]".cyan(), "syncauto".cyan());
    } else {
        println!("{} {}", "Exists".yellow().bold(), path.display());
    }

    Ok(ExitCode::SUCCESS)
}
