use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use syncauto_fs::{CopiedFile, Error, copy_tree};

fn collect(source: &std::path::Path, dest: &std::path::Path) -> (syncauto_fs::Result<()>, Vec<CopiedFile>) {
    let mut copied = Vec::new();
    let result = copy_tree(source, dest, |f| copied.push(f.clone()));
    (result, copied)
}

#[test]
fn test_copy_directory_recreates_structure() {
    let src = assert_fs::TempDir::new().unwrap();
    let dst = assert_fs::TempDir::new().unwrap();

    src.child("top.txt").write_str("top").unwrap();
    src.child("notes/a.md").write_str("alpha").unwrap();
    src.child("notes/deep/b.md").write_str("beta").unwrap();
    src.child("empty").create_dir_all().unwrap();

    let (result, copied) = collect(src.path(), dst.path());
    result.unwrap();

    // 3 files, 3 subdirectories: one COPY per file
    assert_eq!(copied.len(), 3);
    dst.child("top.txt").assert("top");
    dst.child("notes/a.md").assert("alpha");
    dst.child("notes/deep/b.md").assert("beta");
    dst.child("empty").assert(predicate::path::is_dir());
}

#[test]
fn test_copy_creates_missing_destination_parents() {
    let src = assert_fs::TempDir::new().unwrap();
    let dst = assert_fs::TempDir::new().unwrap();
    src.child("x.txt").write_str("x").unwrap();

    let target = dst.child("one/two/three");
    let (result, _) = collect(src.path(), target.path());
    result.unwrap();

    target.child("x.txt").assert("x");
}

#[test]
fn test_copy_single_file_lands_under_base_name() {
    let src = assert_fs::TempDir::new().unwrap();
    let dst = assert_fs::TempDir::new().unwrap();
    let file = src.child("report.pdf");
    file.write_binary(&[0u8, 1, 2, 3]).unwrap();

    let (result, copied) = collect(file.path(), dst.path());
    result.unwrap();

    assert_eq!(copied.len(), 1);
    assert_eq!(copied[0].destination, dst.path().join("report.pdf"));
    assert_eq!(copied[0].bytes, 4);
    dst.child("report.pdf").assert(predicate::path::is_file());
}

#[test]
fn test_copy_overwrites_existing_files() {
    let src = assert_fs::TempDir::new().unwrap();
    let dst = assert_fs::TempDir::new().unwrap();
    src.child("a.txt").write_str("new").unwrap();
    dst.child("a.txt").write_str("old and much longer").unwrap();

    let (result, _) = collect(src.path(), dst.path());
    result.unwrap();

    dst.child("a.txt").assert("new");
}

#[test]
fn test_copy_twice_is_idempotent() {
    let src = assert_fs::TempDir::new().unwrap();
    let dst = assert_fs::TempDir::new().unwrap();
    src.child("a.txt").write_str("a").unwrap();
    src.child("sub/b.txt").write_str("b").unwrap();

    collect(src.path(), dst.path()).0.unwrap();
    let first = snapshot(dst.path());
    collect(src.path(), dst.path()).0.unwrap();
    let second = snapshot(dst.path());

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_entries_copied_in_lexicographic_order() {
    let src = assert_fs::TempDir::new().unwrap();
    let dst = assert_fs::TempDir::new().unwrap();
    for name in ["c.txt", "a.txt", "b.txt"] {
        src.child(name).write_str(name).unwrap();
    }

    let (result, copied) = collect(src.path(), dst.path());
    result.unwrap();

    let names: Vec<String> = copied.iter().map(CopiedFile::file_name).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
}

#[test]
fn test_missing_source_is_source_not_found() {
    let dst = assert_fs::TempDir::new().unwrap();
    let missing = dst.path().join("does-not-exist");

    let (result, copied) = collect(&missing, dst.path());
    let err = result.unwrap_err();

    assert!(matches!(err, Error::SourceNotFound { .. }), "unexpected error: {err}");
    assert!(copied.is_empty());
}

#[test]
fn test_empty_source_path_is_source_not_found() {
    let dst = assert_fs::TempDir::new().unwrap();
    let (result, _) = collect(std::path::Path::new(""), dst.path());
    assert!(matches!(result, Err(Error::SourceNotFound { .. })));
}

#[test]
fn test_first_failure_halts_remaining_entries() {
    let src = assert_fs::TempDir::new().unwrap();
    let dst = assert_fs::TempDir::new().unwrap();
    for name in ["a.txt", "b.txt", "c.txt"] {
        src.child(name).write_str(name).unwrap();
    }
    // A directory where b.txt should go makes creating that file fail
    dst.child("b.txt").create_dir_all().unwrap();

    let (result, copied) = collect(src.path(), dst.path());

    assert!(matches!(result, Err(Error::DestinationCreate { .. })));
    assert_eq!(copied.len(), 1);
    dst.child("a.txt").assert("a.txt");
    dst.child("c.txt").assert(predicate::path::missing());
}

#[test]
fn test_failure_in_subdirectory_propagates_to_parent() {
    let src = assert_fs::TempDir::new().unwrap();
    let dst = assert_fs::TempDir::new().unwrap();
    src.child("a/inner.txt").write_str("inner").unwrap();
    src.child("z.txt").write_str("z").unwrap();
    dst.child("a/inner.txt").create_dir_all().unwrap();

    let (result, copied) = collect(src.path(), dst.path());

    assert!(result.is_err());
    assert!(copied.is_empty());
    dst.child("z.txt").assert(predicate::path::missing());
}

#[test]
fn test_file_onto_itself_is_refused_and_untouched() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("notes.txt").write_str("important data").unwrap();

    let (result, copied) = collect(&dir.path().join("notes.txt"), dir.path());

    assert!(matches!(result, Err(Error::Overlap { .. })));
    assert!(copied.is_empty());
    dir.child("notes.txt").assert("important data");
}

#[test]
fn test_directory_onto_itself_is_refused_and_untouched() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("a.txt").write_str("a").unwrap();
    let before = snapshot(dir.path());

    let (result, copied) = collect(dir.path(), dir.path());

    assert!(matches!(result, Err(Error::Overlap { .. })));
    assert!(copied.is_empty());
    assert_eq!(snapshot(dir.path()), before);
}

#[test]
fn test_directory_into_own_subdirectory_is_refused() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("a.txt").write_str("a").unwrap();

    let (result, _) = collect(dir.path(), &dir.path().join("b"));

    assert!(matches!(result, Err(Error::Overlap { .. })));
    dir.child("b").assert(predicate::path::missing());
}

#[test]
fn test_overlap_detected_through_unnormalized_destination() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("src/a.txt").write_str("a").unwrap();
    dir.child("other").create_dir_all().unwrap();
    let dest = dir.path().join("other").join("..").join("src").join("nested");

    let (result, _) = collect(&dir.path().join("src"), &dest);

    assert!(matches!(result, Err(Error::Overlap { .. })));
}

#[test]
fn test_sibling_destination_is_allowed() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("src/a.txt").write_str("a").unwrap();

    let (result, copied) = collect(&dir.path().join("src"), &dir.path().join("src-copy"));

    result.unwrap();
    assert_eq!(copied.len(), 1);
    dir.child("src-copy/a.txt").assert("a");
}

fn snapshot(root: &std::path::Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_path_buf();
                out.push((rel, fs::read(&path).unwrap()));
            }
        }
    }
    out.sort();
    out
}
