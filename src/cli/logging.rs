// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Console logging for the CLI.
//!
//! Warnings and errors always print to stderr. Per-image progress and section headers
//! print only while the global verbosity flag is set. The macros format through the
//! `*_line` helpers below, so callers need no direct `colored` import.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

/// Global verbosity flag.
static VERBOSE: AtomicBool = AtomicBool::new(true);

/// Set the global verbosity flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

#[must_use]
pub fn warning_line(message: &str) -> String {
    format!("{} {message}", "WARNING ⚠️".yellow().bold())
}

#[must_use]
pub fn error_line(message: &str) -> String {
    format!("{} {message}", "Error:".red().bold())
}

#[must_use]
pub fn success_line(message: &str) -> String {
    format!("{} {message}", "✅".green())
}

#[must_use]
pub fn section_line(message: &str) -> String {
    message.cyan().bold().to_string()
}

/// Plain message on stdout, regardless of verbosity.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*))
    };
}

/// Warning on stderr.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("{}", $crate::cli::logging::warning_line(&format!($($arg)*)))
    };
}

/// Error on stderr.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("{}", $crate::cli::logging::error_line(&format!($($arg)*)))
    };
}

/// Final summary on stdout.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        println!("{}", $crate::cli::logging::success_line(&format!($($arg)*)))
    };
}

/// Message on stdout while verbose.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            println!("{}", format!($($arg)*));
        }
    };
}

/// Blank line and header on stdout while verbose.
#[macro_export]
macro_rules! section {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            println!();
            println!("{}", $crate::cli::logging::section_line(&format!($($arg)*)));
        }
    };
}
