//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which merges every target
//! into a tree and prints it as text, JSON or YAML.

use crate::error::CliError;
use crate::utils::{collect_targets, load_configuration, select_syntax, GlobalOptions};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use targetree::config::{OutputFormat, SyntaxKind};
use targetree::{AncestorPolicy, LocalLister, TreeResolver};

/// Resolve targets and print the tree.
#[derive(Args)]
pub struct ResolveCommand {
    /// Targets to resolve
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Read additional targets from FILE, one per line ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub files_from: Vec<PathBuf>,

    /// Output format [human, json, yaml]
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path syntax used to interpret targets [host, posix, windows]
    #[arg(long, value_name = "SYNTAX")]
    pub syntax: Option<SyntaxKind>,

    /// How to resolve a target that contains other targets
    #[arg(long, value_enum, ignore_case = true)]
    pub ancestor_policy: Option<AncestorPolicyArg>,
}

/// Ancestor policy choices on the command line.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AncestorPolicyArg {
    /// List the ancestor and add its other entries as leaves
    Expand,
    /// Keep the ancestor as a single leaf covering its descendants
    Absorb,
}

impl From<AncestorPolicyArg> for AncestorPolicy {
    fn from(arg: AncestorPolicyArg) -> Self {
        match arg {
            AncestorPolicyArg::Expand => AncestorPolicy::Expand,
            AncestorPolicyArg::Absorb => AncestorPolicy::Absorb,
        }
    }
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Gather targets
        let targets = collect_targets(&self.targets, &self.files_from, &config)?;

        // 3. Build the tree
        let syntax = select_syntax(self.syntax, &config);
        let policy = self
            .ancestor_policy
            .map(AncestorPolicy::from)
            .or(config.ancestor_policy)
            .unwrap_or_default();
        log::debug!("resolving with {syntax} syntax and {policy:?} ancestor policy");

        let lister = LocalLister::new();
        let tree = TreeResolver::new(syntax.provider(), &lister)
            .with_ancestor_policy(policy)
            .resolve(&targets)?;

        // 4. Print it
        let format = self.format.or(config.output_format).unwrap_or_default();
        let output = format.create_formatter().format(&tree)?;
        println!("{output}");

        Ok(())
    }
}
