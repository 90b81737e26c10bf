//! TOML manifest loader.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::Manifest;

/// Load a TOML manifest (`vendor-copy.toml`).
///
/// # Arguments
///
/// * `path` - Path to the TOML manifest
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed as TOML
pub fn load_toml_manifest(path: &Path) -> Result<Manifest, ConfigError> {
    log::debug!("Loading TOML manifest from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let manifest: Manifest = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::debug!(
        "Loaded {} vendor copies, {} dev vendor copies",
        manifest.vendor_copy.len(),
        manifest.dev_vendor_copy.len()
    );

    Ok(manifest)
}
