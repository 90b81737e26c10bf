//! Dereferencing file and directory copying for vendor-copy.
//!
//! This crate provides the copy primitive behind vendor-copy:
//!
//! * Symlinks are followed, copies always contain real content
//! * Directory enumeration using `jwalk`, safe to call from rayon workers
//! * Parallel file copying using `rayon`
//! * Copy-on-write support via `reflink-copy` (APFS, Btrfs, `ReFS`)
//! * Fast file counting
//!
//! # Example
//!
//! ```rust,ignore
//! use vendor_copy_copy::{copy_path, count_files};
//!
//! println!("{} files to copy", count_files(source));
//! copy_path(source, target)?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod count;
mod error;

pub use copy::{CopyResult, copy_directory, copy_file, copy_path};
pub use count::count_files;
pub use error::CopyError;
