//! Fast file counting using jwalk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

/// Count the files a copy of `path` would write.
///
/// - If path is a file (or a link to one): returns 1
/// - If path is a directory: returns count of all files recursively,
///   following links the same way the copy does
/// - If path doesn't exist: returns 0
#[must_use]
pub fn count_files(path: &Path) -> u64 {
    // `is_file`/`is_dir` follow links
    if path.is_file() {
        return 1;
    }

    if !path.is_dir() {
        return 0;
    }

    // Serial for the same reason as the copy walk: callers may be rayon workers
    jwalk::WalkDir::new(path)
        .skip_hidden(false)
        .follow_links(true)
        .sort(false)
        .parallelism(jwalk::Parallelism::Serial)
        .into_iter()
        .filter_map(|entry| {
            entry
                .map_err(|e| log::trace!("Skipping unreadable entry while counting: {e}"))
                .ok()
        })
        .filter(|e| !e.file_type().is_dir())
        .count() as u64
}
