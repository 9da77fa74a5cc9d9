//! Command to show the root boundary of a target.

use crate::error::CliError;
use crate::utils::{load_configuration, select_syntax, GlobalOptions};
use clap::Args;
use targetree::config::SyntaxKind;
use targetree::path::root_boundary;

/// Print the directory, drive or share a target is anchored to.
#[derive(Args)]
pub struct RootCommand {
    /// Target to inspect
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Path syntax used to interpret the target [host, posix, windows]
    #[arg(long, value_name = "SYNTAX")]
    pub syntax: Option<SyntaxKind>,
}

impl RootCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let syntax = select_syntax(self.syntax, &config).provider();

        let boundary = root_boundary(syntax, &self.target);
        println!("{}", syntax.render(&boundary));
        Ok(())
    }
}
