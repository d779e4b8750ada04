// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for shading datasets.
//!
//! This module contains the command-line interface logic, including argument parsing,
//! console logging and the `shade` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Console logging macros.
pub mod logging;

/// Shading command.
pub mod shade;
