//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::Parser;
use vendor_copy_config::Mode;

/// CLI arguments for vendor-copy.
#[derive(Debug, Parser)]
#[command(
    name = "vendor-copy",
    about = "Copy vendored files into a project tree",
    version
)]
pub struct Args {
    /// Project root that manifest paths are relative to (defaults to the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Manifest file to read (defaults to vendor-copy.toml or package.json in the root).
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,

    /// Only run `vendorCopy` entries, ignoring the environment.
    #[arg(long, conflicts_with = "development")]
    pub production: bool,

    /// Also run `devVendorCopy` entries, ignoring the environment.
    #[arg(long)]
    pub development: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Mode forced by flags.
    ///
    /// Returns `None` when the mode should come from the environment.
    #[must_use]
    pub const fn mode_override(&self) -> Option<Mode> {
        if self.production {
            Some(Mode::Production)
        } else if self.development {
            Some(Mode::Development)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_mode_flags() {
        let args = Args::try_parse_from(["vendor-copy"]).unwrap();

        assert_eq!(args.mode_override(), None);
        assert!(args.root.is_none());
        assert!(args.manifest.is_none());
    }

    #[test]
    fn test_production_flag() {
        let args = Args::try_parse_from(["vendor-copy", "--production"]).unwrap();

        assert_eq!(args.mode_override(), Some(Mode::Production));
    }

    #[test]
    fn test_development_flag() {
        let args = Args::try_parse_from(["vendor-copy", "--development"]).unwrap();

        assert_eq!(args.mode_override(), Some(Mode::Development));
    }

    #[test]
    fn test_mode_flags_conflict() {
        assert!(Args::try_parse_from(["vendor-copy", "--production", "--development"]).is_err());
    }

    #[test]
    fn test_paths() {
        let args =
            Args::try_parse_from(["vendor-copy", "--root", "/project", "-m", "vendor.toml"])
                .unwrap();

        assert_eq!(args.root, Some(PathBuf::from("/project")));
        assert_eq!(args.manifest, Some(PathBuf::from("vendor.toml")));
    }
}
