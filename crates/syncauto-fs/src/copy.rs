//! Recursive tree mirroring with durable writes
//!
//! [`copy_tree`] mirrors a file or directory into a destination directory.
//! Directories are walked depth-first in lexicographic entry order. The first
//! failing entry stops the remaining entries of its directory and the error is
//! returned to the caller; files copied before the failure stay in place.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A file that was copied and flushed to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    /// Path the bytes were read from
    pub source: PathBuf,
    /// Path the bytes were written to
    pub destination: PathBuf,
    /// Number of bytes copied
    pub bytes: u64,
}

impl CopiedFile {
    /// Base name of the source file.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Mirror `source` into `dest_dir`.
///
/// - A directory source has its contents copied into `dest_dir`, which is
///   created (with parents) if missing.
/// - A file source is copied to `dest_dir/<file name>`.
///
/// Existing destination files are truncated and overwritten. `on_copied` is
/// called once for every file after its bytes have been synced to disk.
///
/// Fails with [`Error::Overlap`] before touching anything when the copy
/// would write onto `source` itself or into a directory inside it.
pub fn copy_tree<F>(source: &Path, dest_dir: &Path, mut on_copied: F) -> Result<()>
where
    F: FnMut(&CopiedFile),
{
    let metadata = fs::metadata(source).map_err(|e| Error::SourceNotFound {
        path: source.to_path_buf(),
        source: e,
    })?;
    ensure_disjoint(source, dest_dir)?;

    if metadata.is_dir() {
        copy_dir(source, dest_dir, &mut on_copied)
    } else {
        let file_name = source.file_name().unwrap_or(source.as_os_str());
        let copied = copy_file(source, &dest_dir.join(file_name))?;
        on_copied(&copied);
        Ok(())
    }
}

/// Check that mirroring `source` into `dest_dir` never reads its own output.
///
/// A file source must not be the file it would be copied onto. A directory
/// source must not contain `dest_dir`. Symlinks are resolved; a missing
/// source is never reported as overlapping.
pub fn ensure_disjoint(source: &Path, dest_dir: &Path) -> Result<()> {
    let (Ok(metadata), Ok(source_real)) = (fs::metadata(source), source.canonicalize()) else {
        return Ok(());
    };

    let overlaps = if metadata.is_dir() {
        real_path(dest_dir).starts_with(&source_real)
    } else {
        let file_name = source.file_name().unwrap_or(source.as_os_str());
        real_path(&dest_dir.join(file_name)) == source_real
    };

    if overlaps {
        return Err(Error::Overlap {
            from: source.to_path_buf(),
            into: dest_dir.to_path_buf(),
        });
    }
    Ok(())
}

/// Canonicalize the longest existing prefix of `path` and re-append the rest.
fn real_path(path: &Path) -> PathBuf {
    let mut missing = Vec::new();
    let mut current = path;
    loop {
        if let Ok(real) = current.canonicalize() {
            return missing.iter().rev().fold(real, |acc, name| acc.join(name));
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                current = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
            }
            _ => return path.to_path_buf(),
        }
    }
}

fn copy_dir<F>(source: &Path, dest_dir: &Path, on_copied: &mut F) -> Result<()>
where
    F: FnMut(&CopiedFile),
{
    fs::create_dir_all(dest_dir).map_err(|e| Error::CreateDir {
        path: dest_dir.to_path_buf(),
        source: e,
    })?;

    let read_dir_err = |e| Error::ReadDir {
        path: source.to_path_buf(),
        source: e,
    };
    let mut entries = fs::read_dir(source)
        .map_err(read_dir_err)?
        .collect::<io::Result<Vec<_>>>()
        .map_err(read_dir_err)?;
    entries.sort_by_key(|entry| entry.file_name());

    tracing::debug!(
        source = %source.display(),
        dest = %dest_dir.display(),
        entries = entries.len(),
        "Mirroring directory"
    );

    for entry in entries {
        let src_entry = entry.path();
        let dst_entry = dest_dir.join(entry.file_name());
        let file_type = entry.file_type().map_err(read_dir_err)?;

        if file_type.is_dir() {
            copy_dir(&src_entry, &dst_entry, on_copied)?;
        } else {
            let copied = copy_file(&src_entry, &dst_entry)?;
            on_copied(&copied);
        }
    }

    Ok(())
}

/// Copy a single file to an exact destination path and fsync it.
fn copy_file(source: &Path, destination: &Path) -> Result<CopiedFile> {
    let mut src = File::open(source).map_err(|e| Error::SourceOpen {
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut dst = File::create(destination).map_err(|e| Error::DestinationCreate {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let bytes = io::copy(&mut src, &mut dst).map_err(|e| Error::CopyIo {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: e,
    })?;

    dst.sync_all().map_err(|e| Error::DestinationSync {
        path: destination.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(
        source = %source.display(),
        dest = %destination.display(),
        bytes,
        "Copied file"
    );

    Ok(CopiedFile {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        bytes,
    })
}
