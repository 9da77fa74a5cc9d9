//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `TARGETREE_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat, SyntaxKind};
use crate::error::{Error, Result};
use crate::tree::AncestorPolicy;
use std::env;

/// Path syntax override.
pub const SYNTAX_VAR: &str = "TARGETREE_SYNTAX";
/// Output format override.
pub const OUTPUT_FORMAT_VAR: &str = "TARGETREE_OUTPUT_FORMAT";
/// Additional targets, separated like `PATH`.
pub const TARGETS_VAR: &str = "TARGETREE_TARGETS";
/// Ancestor policy override.
pub const ANCESTOR_POLICY_VAR: &str = "TARGETREE_ANCESTOR_POLICY";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use targetree::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(SYNTAX_VAR) {
            let syntax: SyntaxKind = val.parse().map_err(|message| Error::Validation {
                field: SYNTAX_VAR.into(),
                message,
            })?;
            config.syntax = Some(syntax);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_VAR) {
            let format: OutputFormat = val.parse().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_VAR.into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        if let Ok(val) = env::var(ANCESTOR_POLICY_VAR) {
            config.ancestor_policy = Some(Self::parse_policy(&val)?);
        }

        // TARGETREE_TARGETS accumulates onto configured targets
        if let Some(raw) = env::var_os(TARGETS_VAR) {
            let targets = Self::parse_targets(&raw)?;
            if !targets.is_empty() {
                config.targets.get_or_insert_with(Vec::new).extend(targets);
            }
        }

        Ok(())
    }

    fn parse_policy(s: &str) -> Result<AncestorPolicy> {
        match s.to_lowercase().as_str() {
            "expand" => Ok(AncestorPolicy::Expand),
            "absorb" => Ok(AncestorPolicy::Absorb),
            _ => Err(Error::Validation {
                field: ANCESTOR_POLICY_VAR.into(),
                message: format!("Invalid ancestor policy: '{s}' (expected expand or absorb)"),
            }),
        }
    }

    /// Split a path list using the platform separator, skipping empty items.
    fn parse_targets(raw: &std::ffi::OsStr) -> Result<Vec<String>> {
        env::split_paths(raw)
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| {
                p.into_os_string().into_string().map_err(|_| Error::Validation {
                    field: TARGETS_VAR.into(),
                    message: "Targets must be valid UTF-8".into(),
                })
            })
            .collect()
    }
}
