//! Whole-pipeline tests: TOML config through the orchestrator, the real
//! `ToolInvoker` driving a fake sync executable, and the append-only log file.

#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use syncauto_core::{FileSink, LogSink, Manifest, Operation, Orchestrator, RunOptions, Tee};
use syncauto_remote::{RemoteSync, ToolInvoker};
use syncauto_test_utils::{FakeTool, RecordingSink, write_tree};
use tempfile::TempDir;

struct Pipeline {
    recording: Arc<RecordingSink>,
    log_path: std::path::PathBuf,
    orchestrator: Orchestrator,
}

fn pipeline(tool: &FakeTool, work: &Path, capacity: usize) -> Pipeline {
    let log_path = work.join("logs").join("syncAuto.log");
    let recording = Arc::new(RecordingSink::new());
    let sink: Arc<dyn LogSink> = Arc::new(
        Tee::new()
            .with(FileSink::open(&log_path).unwrap())
            .with(Arc::clone(&recording)),
    );
    let remote: Arc<dyn RemoteSync> = Arc::new(ToolInvoker::new(tool.path_str()));
    let orchestrator = Orchestrator::new(
        sink,
        remote,
        RunOptions {
            max_concurrent_folders: capacity,
            dry_run: false,
        },
    );
    Pipeline {
        recording,
        log_path,
        orchestrator,
    }
}

fn log_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_docs_folder_synced_to_two_remotes() {
    let work = TempDir::new().unwrap();
    let source = work.path().join("a");
    write_tree(&source, &[("x.txt", "x")]);
    let tool = FakeTool::succeeding();

    let manifest = Manifest::parse(&format!(
        "[folders.docs]\nsource = '{}'\ndestination = ['remoteA:backup1', 'remoteA:backup2']\n",
        source.display()
    ))
    .unwrap();

    let p = pipeline(&tool, work.path(), 5);
    let summary = p.orchestrator.run(&manifest.folders).await;

    assert!(summary.is_success());
    assert_eq!(summary.count(Operation::Sync), 2);
    assert_eq!(
        tool.invocations(),
        vec![
            format!("sync {} remoteA:backup1", source.display()),
            format!("sync {} remoteA:backup2", source.display()),
        ]
    );

    let lines = log_lines(&p.log_path);
    assert_eq!(lines.len(), 2);
    for dest in ["remoteA:backup1", "remoteA:backup2"] {
        let expected = format!(
            "[docs] [SYNC] Folder '{}' synced successfully to '{dest}'",
            source.display()
        );
        let matching: Vec<_> = lines.iter().filter(|l| l.ends_with(&expected)).collect();
        assert_eq!(matching.len(), 1, "{expected:?} in {lines:?}");
        assert!(matching[0].starts_with('['));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_badformat_destination_is_skipped() {
    let work = TempDir::new().unwrap();
    let source = work.path().join("a");
    fs::create_dir_all(&source).unwrap();
    let tool = FakeTool::succeeding();

    let manifest = Manifest::parse(&format!(
        "[folders.docs]\nsource = '{}'\ndestination = ['badformat', 'remoteA:backup1']\n",
        source.display()
    ))
    .unwrap();

    let p = pipeline(&tool, work.path(), 5);
    let summary = p.orchestrator.run(&manifest.folders).await;

    assert_eq!(summary.count(Operation::ConfigError), 1);
    assert_eq!(summary.count(Operation::Sync), 1);
    assert!(!summary.is_success());
    assert_eq!(
        p.recording.messages(Operation::ConfigError),
        vec!["Invalid destination format in config: badformat".to_string()]
    );
    assert_eq!(tool.invocations().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_folders_are_isolated_from_each_other() {
    let work = TempDir::new().unwrap();
    let original = work.path().join("photos-original");
    write_tree(&original, &[("a.jpg", "a"), ("b.jpg", "b")]);
    let staging = work.path().join("photos");
    let music = work.path().join("music");
    fs::create_dir_all(&music).unwrap();
    let tool = FakeTool::succeeding_for("good");

    let manifest = Manifest::parse(&format!(
        r#"
[settings]
max_concurrent_folders = 2

[folders.photos]
originalSource = '{}'
source = '{}'
destination = ['good:photos', 'bad:photos']

[folders.music]
source = '{}'
destination = ['good:music']

[folders.broken]
source = ''
destination = ['good:broken']
"#,
        original.display(),
        staging.display(),
        music.display()
    ))
    .unwrap();

    let p = pipeline(&tool, work.path(), manifest.settings.max_concurrent_folders);
    let summary = p.orchestrator.run(&manifest.folders).await;

    assert_eq!(summary.folders, 3);
    assert_eq!(p.recording.count_for("photos", Operation::Copy), 2);
    assert_eq!(p.recording.count_for("photos", Operation::Sync), 1);
    assert_eq!(p.recording.count_for("photos", Operation::SyncError), 1);
    assert_eq!(p.recording.count_for("music", Operation::Sync), 1);
    assert_eq!(p.recording.count_for("broken", Operation::Error), 1);
    assert_eq!(fs::read_to_string(staging.join("b.jpg")).unwrap(), "b");

    // broken never reaches the tool
    assert_eq!(tool.invocations().len(), 3);
    assert_eq!(log_lines(&p.log_path).len(), p.recording.entries().len());
}

#[tokio::test]
async fn test_log_is_appended_across_runs() {
    let work = TempDir::new().unwrap();
    let source = work.path().join("a");
    fs::create_dir_all(&source).unwrap();
    let tool = FakeTool::succeeding();
    let manifest = Manifest::parse(&format!(
        "[folders.docs]\nsource = '{}'\ndestination = ['r:one']\n",
        source.display()
    ))
    .unwrap();

    for _ in 0..2 {
        let p = pipeline(&tool, work.path(), 1);
        p.orchestrator.run(&manifest.folders).await;
    }

    let lines = log_lines(&work.path().join("logs").join("syncAuto.log"));
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.contains("[docs] [SYNC]")));
}
