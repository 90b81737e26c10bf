//! Manifest file discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Manifest file names, in lookup order.
pub const MANIFEST_FILE_NAMES: [&str; 2] = ["vendor-copy.toml", "package.json"];

/// Find the manifest in a project root.
///
/// A dedicated `vendor-copy.toml` wins over `package.json`.
///
/// # Errors
///
/// * If neither file exists in `root`
pub fn discover_manifest(root: &Path) -> Result<PathBuf, ConfigError> {
    log::debug!("Discovering manifest in {}", root.display());

    MANIFEST_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
        .inspect(|path| log::debug!("Found manifest {}", path.display()))
        .ok_or_else(|| ConfigError::ManifestNotFound(root.to_path_buf()))
}
