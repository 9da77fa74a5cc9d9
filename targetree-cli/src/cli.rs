//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ComponentsCommand, CompletionsCommand, ResolveCommand, RootCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving backup targets into a single tree.
#[derive(Parser)]
#[command(name = "targetree")]
#[command(version, about = "Resolve backup targets into a single tree", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read the user configuration from this file
    #[arg(long, value_name = "PATH", global = true, env = "TARGETREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve targets and print the tree
    Resolve(ResolveCommand),

    /// Print the root boundary of a target
    Root(RootCommand),

    /// Print the components of a target
    Components(ComponentsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
