//! Configuration system for targetree.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `targetree.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of target and file lists
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`TARGETREE_*`)
//! 3. Project config (`targetree.yaml`, nearest one walking up)
//! 4. User config (`~/.targetree/config.yaml` or an explicit path)
//! 5. Built-in defaults
//!
//! Scalar settings are overridden by higher layers; `targets` and
//! `files_from` accumulate across all of them.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use targetree::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("default targets: {:?}", config.targets);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, SyntaxKind};
pub use validator::ConfigValidator;
