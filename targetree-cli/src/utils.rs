//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and target collection.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use targetree::config::SyntaxKind;
use targetree::targets::read_targets_file;
use targetree::{Config, ConfigBuilder};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit user configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project `targetree.yaml`
/// 3. User configuration file (`--config` or the default location)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_user_config(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the path syntax: explicit flag, then configuration, then the host's.
pub fn select_syntax(flag: Option<SyntaxKind>, config: &Config) -> SyntaxKind {
    flag.or(config.syntax).unwrap_or_default()
}

/// Gather targets from the command line, falling back to configuration.
///
/// Targets given as arguments or through `--files-from` take precedence.
/// Only when neither supplies anything are the configured `targets` and
/// `files_from` consulted.
///
/// # Errors
///
/// Returns `InvalidArguments` if no source yields a target, and a library
/// error if a target file cannot be read.
pub fn collect_targets(
    targets: &[String],
    files_from: &[PathBuf],
    config: &Config,
) -> Result<Vec<String>, CliError> {
    let mut collected = targets.to_vec();
    for file in files_from {
        collected.extend(read_targets_file(file)?);
    }

    if targets.is_empty() && files_from.is_empty() {
        if let Some(ref configured) = config.targets {
            collected.extend(configured.iter().cloned());
        }
        if let Some(ref files) = config.files_from {
            for file in files {
                collected.extend(read_targets_file(Path::new(file))?);
            }
        }
    }

    if collected.is_empty() {
        return Err(CliError::InvalidArguments(
            "no targets given (pass TARGET arguments, --files-from, or configure targets)"
                .to_string(),
        ));
    }

    log::debug!("collected {} target(s)", collected.len());
    Ok(collected)
}
