//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// syncauto - mirror local folders to remote storage with rclone
#[derive(Parser, Debug)]
#[command(name = "syncauto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ~/.config/syncAuto/config.toml)
    #[arg(short, long, global = true, env = "SYNCAUTO_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run; `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sync every configured folder once
    ///
    /// Creates a default config on first use.
    ///
    /// Examples:
    ///   syncauto run                 # Sync with settings from config.toml
    ///   syncauto run -j 2            # At most two folders at a time
    ///   syncauto run --dry-run       # Show what would be synced
    Run(RunArgs),

    /// Create the default config file if it does not exist
    Init,

    /// Validate the config without copying or syncing anything
    Check(CheckArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Run(RunArgs::default())
    }
}

/// Options for `syncauto run`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Operational log file (default: ~/repos/syncAuto/syncAuto.log)
    #[arg(long, env = "SYNCAUTO_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Maximum number of folders processed at once
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Sync executable name or path
    #[arg(long)]
    pub tool: Option<String>,

    /// Kill a sync that runs longer than this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log what would be synced without copying or running the tool
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Options for `syncauto check`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckArgs {
    /// Sync executable name or path
    #[arg(long)]
    pub tool: Option<String>,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}
