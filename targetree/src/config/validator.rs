//! Configuration validation.
//!
//! Checks the target and file lists of a configuration before any of them
//! is handed to the resolver or opened.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use targetree::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { targets: Some(vec!["  ".to_string()]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending entry.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref targets) = config.targets {
            for (index, target) in targets.iter().enumerate() {
                Self::validate_entry(&format!("targets[{index}]"), target)?;
            }
        }

        if let Some(ref files) = config.files_from {
            for (index, file) in files.iter().enumerate() {
                Self::validate_entry(&format!("files_from[{index}]"), file)?;
            }
        }

        Ok(())
    }

    /// Validate a single path entry.
    ///
    /// Checks that the entry is non-empty after trimming and contains no
    /// null bytes.
    fn validate_entry(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }
}
