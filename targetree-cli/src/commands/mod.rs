//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve targets and print the tree
//! - `root`: Print the root boundary of a target
//! - `components`: Print the components of a target
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod components;
pub mod resolve;
pub mod root;
pub mod validate;

pub use completions::CompletionsCommand;
pub use components::ComponentsCommand;
pub use resolve::ResolveCommand;
pub use root::RootCommand;
pub use validate::ValidateCommand;
