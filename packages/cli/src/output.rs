//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::error::Error;

use colored::Colorize;
use vendor_copy_operations::ResolvedCopy;

/// Print one completed copy as `<from> => <to>`.
pub fn print_copied(copied: &ResolvedCopy) {
    println!("{copied}");
}

/// Print the failure diagnostic followed by the error's causes.
pub fn print_failure(error: &dyn Error) {
    eprintln!(
        "{} {}",
        "Failed to install vendor modules:".red().bold(),
        error
    );
    for cause in error_causes(error) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}

/// Messages in the `source()` chain below `error` not already shown.
///
/// Most errors embed their source in their own message; those causes are
/// skipped so nothing is printed twice.
fn error_causes(error: &dyn Error) -> Vec<String> {
    let mut shown = error.to_string();
    let mut causes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if !shown.contains(&message) {
            shown.push('\n');
            shown.push_str(&message);
            causes.push(message);
        }
        source = cause.source();
    }
    causes
}
