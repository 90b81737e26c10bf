//! Manifest loading for vendor-copy.
//!
//! This crate provides the copy spec types and manifest loading for the
//! vendor-copy CLI.
//!
//! # Supported Manifest Formats
//!
//! * JSON (`package.json`) - `vendorCopy` and `devVendorCopy` fields
//! * TOML (`vendor-copy.toml`) - `[[vendorCopy]]` and `[[devVendorCopy]]` tables
//!
//! # Example
//!
//! ```rust,ignore
//! use vendor_copy_config::{Mode, discover_manifest, load_manifest};
//!
//! let path = discover_manifest(root)?;
//! let manifest = load_manifest(&path)?;
//! let specs = manifest.select_specs(Mode::Production);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod discovery;
mod error;
mod json_loader;
mod toml_loader;
mod types;

pub use discovery::{MANIFEST_FILE_NAMES, discover_manifest};
pub use error::ConfigError;
pub use json_loader::load_json_manifest;
pub use toml_loader::load_toml_manifest;
pub use types::{CopySpec, Manifest, Mode};

use std::path::Path;

/// Load a manifest file, auto-detecting the format based on extension.
///
/// # Errors
///
/// * If the file extension is not supported
/// * If the file cannot be read
/// * If the file cannot be parsed
pub fn load_manifest(path: &Path) -> Result<Manifest, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "toml" => load_toml_manifest(path),
        "json" => load_json_manifest(path),
        _ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
    }
}
