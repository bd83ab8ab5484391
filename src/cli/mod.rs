//! Command-Line Interface
//!
//! Subcommand implementations and console output helpers.

pub mod commands;
pub mod output;

pub use output::{ConsoleProgress, Output};
