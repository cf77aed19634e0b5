//! Run command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use colored::Colorize;
use syncauto_core::config::{default_log_path, ensure_config};
use syncauto_core::{
    FileSink, LogSink, Manifest, Orchestrator, RunOptions, Settings, Tee, TracingSink,
};
use syncauto_fs::resolve_path;
use syncauto_remote::{RemoteSync, ToolInvoker};

use super::config_path;
use crate::cli::RunArgs;
use crate::error::Result;

/// Load the config, sync every folder once and report the totals.
///
/// Exits non-zero when any destination or folder failed.
pub fn run_sync(config: Option<&Path>, args: &RunArgs) -> Result<ExitCode> {
    let path = config_path(config)?;
    if ensure_config(&path)? {
        tracing::info!(path = %path.display(), "Created default config");
    } else {
        tracing::debug!(path = %path.display(), "Using existing config");
    }

    let manifest = Manifest::load(&path)?;
    let settings = apply_overrides(manifest.settings.clone(), args);
    settings.validate()?;

    let log_path = log_path(args, &settings)?;
    let file_sink = FileSink::open(&log_path)?;
    let sink: Arc<dyn LogSink> = Arc::new(Tee::new().with(file_sink).with(TracingSink));

    let invoker = ToolInvoker::new(settings.sync_tool.clone()).with_timeout(settings.sync_timeout());
    let remote: Arc<dyn RemoteSync> = Arc::new(invoker);

    let orchestrator = Orchestrator::new(
        Arc::clone(&sink),
        remote,
        RunOptions {
            max_concurrent_folders: settings.max_concurrent_folders,
            dry_run: args.dry_run,
        },
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let summary = runtime.block_on(orchestrator.run(&manifest.folders));
    sink.flush();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let label = if summary.is_success() {
            "Done".green().bold()
        } else {
            "Failed".red().bold()
        };
        println!("{label} {summary}");
        println!("{}:    {}", "Log".dimmed(), log_path.display());
    }

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Command-line flags take precedence over `[settings]`.
fn apply_overrides(mut settings: Settings, args: &RunArgs) -> Settings {
    if let Some(jobs) = args.jobs {
        settings.max_concurrent_folders = jobs;
    }
    if let Some(tool) = &args.tool {
        settings.sync_tool = tool.clone();
    }
    if let Some(secs) = args.timeout {
        settings.sync_timeout_secs = Some(secs);
    }
    settings
}

fn log_path(args: &RunArgs, settings: &Settings) -> Result<PathBuf> {
    if let Some(path) = &args.log_file {
        return Ok(path.clone());
    }
    match &settings.log_file {
        Some(raw) => Ok(resolve_path(raw)?),
        None => Ok(default_log_path()?),
    }
}
