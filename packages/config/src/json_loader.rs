//! JSON manifest loader (`package.json`).

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::Manifest;

/// Load the vendor copy fields from a JSON manifest.
///
/// Every other field of the document (name, dependencies, scripts...) is
/// ignored, and missing `vendorCopy`/`devVendorCopy` fields load as empty.
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file is not valid JSON or the vendor copy fields are malformed
pub fn load_json_manifest(path: &Path) -> Result<Manifest, ConfigError> {
    log::debug!("Loading JSON manifest from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let manifest: Manifest =
        serde_json::from_str(&content).map_err(|e| ConfigError::JsonParseError {
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
