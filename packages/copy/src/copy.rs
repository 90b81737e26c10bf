//! Dereferencing file and directory copying.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::CopyError;

/// Result of a copy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    /// A single file was copied.
    File,
    /// A directory tree was copied.
    Directory {
        /// Number of files copied.
        files_copied: u64,
        /// Number of directories created or merged into (the root included).
        dirs_created: u64,
    },
}

/// Entry collected during directory enumeration.
#[derive(Debug, Clone)]
struct TreeEntry {
    /// Source path (inside the canonical source root).
    source: PathBuf,
    /// Target path.
    target: PathBuf,
    /// Whether the entry (after following links) is a directory.
    is_dir: bool,
}

/// Copy a file, directory or symlink from `source` to `target`.
///
/// Symlinks are always dereferenced: the copy holds the content the link
/// points at, never the link itself. Directories are copied recursively and
/// merged into `target` if it already exists. Existing files are overwritten.
///
/// The parent of `target` must already exist.
///
/// # Errors
///
/// * If `source` does not exist
/// * If a directory cannot be created
/// * If any file copy fails (fail-fast behavior)
pub fn copy_path(source: &Path, target: &Path) -> Result<CopyResult, CopyError> {
    let metadata = fs::metadata(source).map_err(|e| source_error(source, e))?;

    if metadata.is_dir() {
        copy_directory(source, target)
    } else {
        copy_file(source, target)
    }
}

/// Copy a single file, overwriting `target` if it exists.
///
/// If `source` is a symlink, the content of the file it points to is copied.
///
/// # Errors
///
/// * If `source` does not exist
/// * If the copy operation fails
pub fn copy_file(source: &Path, target: &Path) -> Result<CopyResult, CopyError> {
    log::debug!("Copying file: {} -> {}", source.display(), target.display());

    fs::metadata(source).map_err(|e| source_error(source, e))?;
    copy_file_with_reflink(source, target)?;

    Ok(CopyResult::File)
}

/// Copy a directory tree, copying files in parallel.
///
/// Links anywhere in the tree are followed. Empty directories are recreated.
///
/// # Errors
///
/// * If `source` does not exist
/// * If enumeration fails (including symlink loops)
/// * If any file copy fails (fail-fast behavior)
pub fn copy_directory(source: &Path, target: &Path) -> Result<CopyResult, CopyError> {
    log::debug!(
        "Copying directory: {} -> {}",
        source.display(),
        target.display()
    );

    // Walk the real directory so a linked root behaves like any other link
    let root = fs::canonicalize(source).map_err(|e| source_error(source, e))?;

    // Phase 1: Enumerate the tree using jwalk
    let entries = enumerate_directory(&root, target)?;

    let mut dirs: BTreeSet<&Path> = BTreeSet::new();
    dirs.insert(target);
    let mut files = Vec::new();
    for entry in &entries {
        if entry.is_dir {
            dirs.insert(entry.target.as_path());
        } else {
            files.push(entry);
        }
    }

    log::debug!(
        "Found {} files and {} directories to copy",
        files.len(),
        dirs.len()
    );

    // Phase 2: Create directories (ordered, parents first)
    for dir in &dirs {
        fs::create_dir_all(dir).map_err(|e| CopyError::CreateDirError {
            path: dir.to_path_buf(),
            io_error: e,
        })?;
    }

    // Phase 3: Copy files in parallel using rayon
    files
        .par_iter()
        .try_for_each(|entry| copy_file_with_reflink(&entry.source, &entry.target))?;

    Ok(CopyResult::Directory {
        files_copied: files.len() as u64,
        dirs_created: dirs.len() as u64,
    })
}

/// Enumerate every entry below `root` using jwalk, following links.
///
/// The walk is serial: callers may already be running on a rayon worker, and
/// a jwalk walk on the shared pool blocks that worker until the pool frees up.
fn enumerate_directory(root: &Path, target: &Path) -> Result<Vec<TreeEntry>, CopyError> {
    let mut entries = Vec::new();

    for entry in jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(true)
        .parallelism(jwalk::Parallelism::Serial)
    {
        let entry = entry.map_err(|e| CopyError::WalkError {
            path: root.to_path_buf(),
            walk_error: e,
        })?;

        let source_path = entry.path();

        if source_path == root {
            continue;
        }

        let rel_path =
            source_path
                .strip_prefix(root)
                .map_err(|_| CopyError::EnumerationError {
                    path: source_path.clone(),
                    message: "Failed to strip prefix".to_string(),
                })?;

        entries.push(TreeEntry {
            target: target.join(rel_path),
            is_dir: entry.file_type().is_dir(),
            source: source_path,
        });
    }

    Ok(entries)
}

/// Copy a single file, trying reflink first then falling back to regular copy.
fn copy_file_with_reflink(source: &Path, target: &Path) -> Result<(), CopyError> {
    // Reflink refuses to replace an existing target, the fallback overwrites it
    match reflink_copy::reflink(source, target) {
        Ok(()) => {
            log::trace!("Reflinked {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(_) => {
            fs::copy(source, target).map_err(|e| CopyError::FileCopyError {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error: e,
            })?;
            log::trace!("Copied {} -> {}", source.display(), target.display());
            Ok(())
        }
    }
}

fn source_error(path: &Path, io_error: io::Error) -> CopyError {
    if io_error.kind() == io::ErrorKind::NotFound {
        CopyError::SourceNotFound {
            path: path.to_path_buf(),
            io_error,
        }
    } else {
        CopyError::MetadataError {
            path: path.to_path_buf(),
            io_error,
        }
    }
}
