//! syncauto CLI
//!
//! Mirrors configured local folders to their remotes with an external sync
//! tool, one pass per invocation.

mod cli;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    let config = cli.config.as_deref();
    match cli.command.unwrap_or_default() {
        Commands::Run(args) => commands::run_sync(config, &args),
        Commands::Init => commands::run_init(config),
        Commands::Check(args) => commands::run_check(config, &args),
    }
}
