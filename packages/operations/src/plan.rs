//! Copy planning - resolve relative copy specs against a project root.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;
use vendor_copy_config::CopySpec;

/// A copy spec with both sides resolved to absolute paths.
///
/// Returned by [`crate::copy_all`] once the copy has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCopy {
    /// Absolute source path.
    pub from: PathBuf,
    /// Absolute destination path.
    pub to: PathBuf,
}

impl std::fmt::Display for ResolvedCopy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.from.display(), self.to.display())
    }
}

/// Join a manifest path onto `root` and normalize the result.
///
/// The manifest path is always treated as relative: a leading `/` is
/// appended below `root` rather than replacing it. `.` and `..` segments
/// are collapsed lexically, so `../shared` resolves to a sibling of `root`.
#[must_use]
pub fn resolve_path(root: &Path, relative: &str) -> PathBuf {
    let mut path = root.to_path_buf();

    for component in Path::new(relative).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            Component::CurDir | Component::ParentDir | Component::Normal(_) => {
                path.push(component);
            }
        }
    }

    path.clean()
}

/// Resolve both sides of a copy spec against `root`.
#[must_use]
pub fn resolve(root: &Path, spec: &CopySpec) -> ResolvedCopy {
    ResolvedCopy {
        from: resolve_path(root, &spec.from),
        to: resolve_path(root, &spec.to),
    }
}
