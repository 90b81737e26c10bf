//! Copy orchestration.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use vendor_copy_config::CopySpec;
use vendor_copy_copy::{CopyResult, copy_path, count_files};

use crate::error::OperationError;
use crate::plan::{ResolvedCopy, resolve};

/// Copy every spec into place, resolving paths against `root`.
///
/// Specs are copied concurrently and independently. On success the returned
/// list has the same length and order as `specs`. If any spec fails, the whole
/// call fails with the first error observed and no partial result is
/// returned; copies already in flight run to completion, specs not yet
/// started are skipped.
///
/// # Arguments
///
/// * `root` - Absolute project directory that spec paths are relative to
/// * `specs` - Copy specs to run
///
/// # Errors
///
/// * If a destination directory cannot be created
/// * If a source does not exist
/// * If any copy fails
pub fn copy_all(root: &Path, specs: &[CopySpec]) -> Result<Vec<ResolvedCopy>, OperationError> {
    if specs.is_empty() {
        return Ok(Vec::new());
    }

    log::debug!("Copying {} items relative to {}", specs.len(), root.display());

    specs.par_iter().map(|spec| copy_one(root, spec)).collect()
}

/// Resolve, prepare and copy a single spec.
///
/// # Errors
///
/// * If the destination's parent directory cannot be created
/// * If the copy fails
pub fn copy_one(root: &Path, spec: &CopySpec) -> Result<ResolvedCopy, OperationError> {
    let resolved = resolve(root, spec);

    ensure_parent_dir(&resolved.to)?;

    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "Copying {} ({} files)",
            resolved,
            count_files(&resolved.from)
        );
    }

    match copy_path(&resolved.from, &resolved.to)? {
        CopyResult::File => log::debug!("Copied file {}", resolved.to.display()),
        CopyResult::Directory {
            files_copied,
            dirs_created,
        } => log::debug!(
            "Copied {} files into {} directories under {}",
            files_copied,
            dirs_created,
            resolved.to.display()
        ),
    }

    Ok(resolved)
}

/// Create every missing directory above `path`.
///
/// # Errors
///
/// * If a directory cannot be created (e.g. a component is a file)
pub fn ensure_parent_dir(path: &Path) -> Result<(), OperationError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| OperationError::CreateDirError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::error::FailureKind;

    /// Mirrors a project layout: specs are resolved from `root/test` and
    /// reach the copy space through `..`.
    struct CopySpace {
        dir: TempDir,
    }

    impl CopySpace {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let space = dir.path().join("space");
            fs::create_dir_all(dir.path().join("test")).unwrap();
            fs::create_dir_all(space.join("source")).unwrap();
            fs::create_dir_all(space.join("target")).unwrap();
            fs::write(space.join("source/fixture.01.txt"), "fixture 01").unwrap();
            fs::write(space.join("source/fixture.02.txt"), "fixture 02").unwrap();
            #[cfg(unix)]
            std::os::unix::fs::symlink(
                space.join("source/fixture.01.txt"),
                space.join("source/fixture.03.txt"),
            )
            .unwrap();
            Self { dir }
        }

        fn root(&self) -> PathBuf {
            self.dir.path().join("test")
        }

        fn read(&self, relative: &str) -> String {
            fs::read_to_string(self.dir.path().join("space").join(relative)).unwrap()
        }
    }

    #[test]
    fn test_copy_single_file_into_existing_directory() {
        let space = CopySpace::new();
        let specs = [CopySpec::new(
            "../space/source/fixture.01.txt",
            "../space/target/fixture.01.txt",
        )];

        copy_all(&space.root(), &specs).unwrap();

        assert_eq!(space.read("target/fixture.01.txt"), "fixture 01");
    }

    #[test]
    fn test_copy_multiple_files_preserves_order() {
        let space = CopySpace::new();
        let root = space.root();
        let specs = [
            CopySpec::new(
                "../space/source/fixture.01.txt",
                "../space/target/fixture.01.txt",
            ),
            CopySpec::new(
                "../space/source/fixture.02.txt",
                "../space/target/fixture.02.txt",
            ),
        ];

        let results = copy_all(&root, &specs).unwrap();

        let base = space.dir.path().join("space");
        assert_eq!(
            results,
            vec![
                ResolvedCopy {
                    from: base.join("source/fixture.01.txt"),
                    to: base.join("target/fixture.01.txt"),
                },
                ResolvedCopy {
                    from: base.join("source/fixture.02.txt"),
                    to: base.join("target/fixture.02.txt"),
                },
            ]
        );
        assert_eq!(space.read("target/fixture.01.txt"), "fixture 01");
        assert_eq!(space.read("target/fixture.02.txt"), "fixture 02");
    }

    #[test]
    fn test_copy_file_into_missing_directories() {
        let space = CopySpace::new();
        let specs = [CopySpec::new(
            "../space/source/fixture.01.txt",
            "../space/target/some/path/fixture.01.txt",
        )];

        copy_all(&space.root(), &specs).unwrap();

        assert_eq!(space.read("target/some/path/fixture.01.txt"), "fixture 01");
    }

    #[test]
    fn test_copy_directory_into_missing_directories() {
        let space = CopySpace::new();
        let specs = [CopySpec::new("../space/source", "../space/target/some/path")];

        copy_all(&space.root(), &specs).unwrap();

        assert_eq!(space.read("target/some/path/fixture.01.txt"), "fixture 01");
        assert_eq!(space.read("target/some/path/fixture.02.txt"), "fixture 02");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_resolves_symlinks() {
        let space = CopySpace::new();
        let specs = [CopySpec::new(
            "../space/source/fixture.03.txt",
            "../space/target/fixture.03.txt",
        )];

        copy_all(&space.root(), &specs).unwrap();

        let target = space.dir.path().join("space/target/fixture.03.txt");
        assert!(!target.is_symlink());
        assert_eq!(space.read("target/fixture.03.txt"), "fixture 01");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_directory_resolves_nested_symlinks() {
        let space = CopySpace::new();
        let specs = [CopySpec::new("../space/source", "../space/target/tree")];

        copy_all(&space.root(), &specs).unwrap();

        let copied_link = space.dir.path().join("space/target/tree/fixture.03.txt");
        assert!(!copied_link.is_symlink());
        assert_eq!(space.read("target/tree/fixture.03.txt"), "fixture 01");
    }

    #[test]
    fn test_missing_source_fails_the_batch() {
        let space = CopySpace::new();
        let specs = [
            CopySpec::new(
                "../space/source/fixture.01.txt",
                "../space/target/fixture.01.txt",
            ),
            CopySpec::new("../space/source/missing.txt", "../space/target/missing.txt"),
        ];

        let err = copy_all(&space.root(), &specs).unwrap_err();

        assert_eq!(err.kind(), FailureKind::SourceNotFound);
        assert!(!space.dir.path().join("space/target/missing.txt").exists());
    }

    #[test]
    fn test_parent_is_a_file_fails() {
        let space = CopySpace::new();
        let specs = [CopySpec::new(
            "../space/source/fixture.01.txt",
            "../space/source/fixture.02.txt/nested.txt",
        )];

        let err = copy_all(&space.root(), &specs).unwrap_err();

        assert!(matches!(err, OperationError::CreateDirError { .. }));
        assert_eq!(space.read("source/fixture.02.txt"), "fixture 02");
    }

    #[test]
    fn test_empty_specs_has_no_side_effects() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("does-not-exist");

        let results = copy_all(&root, &[]).unwrap();

        assert!(results.is_empty());
        assert!(!root.exists());
    }

    #[test]
    fn test_copy_twice_is_stable() {
        let space = CopySpace::new();
        let specs = [
            CopySpec::new("../space/source", "../space/target/tree"),
            CopySpec::new(
                "../space/source/fixture.02.txt",
                "../space/target/single.txt",
            ),
        ];

        let first = copy_all(&space.root(), &specs).unwrap();
        let second = copy_all(&space.root(), &specs).unwrap();

        assert_eq!(first, second);
        assert_eq!(space.read("target/tree/fixture.01.txt"), "fixture 01");
        assert_eq!(space.read("target/tree/fixture.02.txt"), "fixture 02");
        assert_eq!(space.read("target/single.txt"), "fixture 02");
    }

    fn directory_specs(space: &CopySpace, count: usize) -> Vec<CopySpec> {
        (0..count)
            .map(|i| {
                let source = space.dir.path().join(format!("space/trees/src{i}/nested"));
                fs::create_dir_all(&source).unwrap();
                fs::write(source.join("file.txt"), format!("tree {i}")).unwrap();
                CopySpec::new(
                    format!("../space/trees/src{i}"),
                    format!("../space/target/dst{i}"),
                )
            })
            .collect()
    }

    #[test]
    fn test_copy_more_directories_than_pool_threads() {
        let space = CopySpace::new();
        let specs = directory_specs(&space, rayon::current_num_threads() * 4 + 1);

        let results = copy_all(&space.root(), &specs).unwrap();

        assert_eq!(results.len(), specs.len());
        for i in 0..specs.len() {
            assert_eq!(
                space.read(&format!("target/dst{i}/nested/file.txt")),
                format!("tree {i}")
            );
        }
    }

    #[test]
    fn test_copy_directories_on_single_thread_pool() {
        let space = CopySpace::new();
        let specs = directory_specs(&space, 16);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();

        let results = pool.install(|| copy_all(&space.root(), &specs)).unwrap();

        assert_eq!(results.len(), 16);
        assert_eq!(space.read("target/dst15/nested/file.txt"), "tree 15");
    }

    #[test]
    fn test_ensure_parent_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a/b/c.txt");

        ensure_parent_dir(&file).unwrap();
        ensure_parent_dir(&file).unwrap();

        assert!(dir.path().join("a/b").is_dir());
        assert!(!file.exists());
    }
}
