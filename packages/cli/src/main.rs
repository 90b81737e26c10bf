//! vendor-copy CLI entry point.
//!
//! Copies the files listed in a project manifest into the project tree.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;

use args::Args;
use vendor_copy_config::{Mode, discover_manifest, load_manifest};
use vendor_copy_operations::{ResolvedCopy, copy_all};

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    match run(&args) {
        Ok(copied) => {
            for item in &copied {
                output::print_copied(item);
            }
        }
        Err(e) => {
            output::print_failure(e.as_ref());
            std::process::exit(1);
        }
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<Vec<ResolvedCopy>, Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;
    let root = args
        .root
        .as_deref()
        .map_or_else(|| cwd.clone(), |root| absolute(&cwd, root));

    let manifest_path = match args.manifest.as_deref() {
        Some(path) => absolute(&cwd, path),
        None => discover_manifest(&root)?,
    };
    let manifest = load_manifest(&manifest_path)?;

    let mode = args.mode_override().unwrap_or_else(|| {
        Mode::from_env_values(
            env::var("npm_config_production").ok().as_deref(),
            env::var("NODE_ENV").ok().as_deref(),
        )
    });

    let specs = manifest.select_specs(mode);
    log::info!(
        "Copying {} entries from {} ({mode} mode)",
        specs.len(),
        manifest_path.display()
    );

    Ok(copy_all(&root, &specs)?)
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
