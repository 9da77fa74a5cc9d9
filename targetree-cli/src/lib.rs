//! Library exports for targetree-cli.
//!
//! This module exports the CLI structure for use by tests and tooling that
//! need the command definition, such as completion and man page generators.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for external tooling
pub use cli::Cli;
