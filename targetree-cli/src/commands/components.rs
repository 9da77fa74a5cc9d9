//! Command to show the path components of a target.

use crate::error::CliError;
use crate::utils::{load_configuration, select_syntax, GlobalOptions};
use clap::Args;
use targetree::config::SyntaxKind;
use targetree::path::path_components;

/// Print the components leading from a target's root down to it.
///
/// One name per line, followed by the number of leading virtual
/// components (drive letters, UNC host and share).
#[derive(Args)]
pub struct ComponentsCommand {
    /// Target to inspect
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Keep leading ".." components
    #[arg(long)]
    pub keep_ascension: bool,

    /// Path syntax used to interpret the target [host, posix, windows]
    #[arg(long, value_name = "SYNTAX")]
    pub syntax: Option<SyntaxKind>,
}

impl ComponentsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let syntax = select_syntax(self.syntax, &config).provider();

        let components = path_components(syntax, &self.target, self.keep_ascension);
        for name in components.names() {
            println!("{name}");
        }
        println!("virtual: {}", components.virtual_count());
        Ok(())
    }
}
