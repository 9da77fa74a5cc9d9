//! Error types for the targetree library.
//!
//! This module provides the error hierarchy for target resolution,
//! configuration and target-file handling, using `thiserror` for ergonomic
//! error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a targetree error.
///
/// # Examples
///
/// ```
/// use targetree::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the targetree library.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more targets do not name anything below their own root.
    ///
    /// Resolution aborts as a whole when this is returned; no partial tree
    /// is produced.
    #[error("invalid target{} {}: {reason}", if .targets.len() == 1 { "" } else { "s" }, quote_all(.targets))]
    InvalidTarget {
        /// Every offending target, as the user supplied it.
        targets: Vec<String>,
        /// Why the targets were rejected.
        reason: String,
    },

    /// A directory could not be listed while expanding an ancestor target.
    #[error("cannot list directory '{path}': {source}")]
    ListDirectory {
        /// The directory that was being listed.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

fn quote_all(targets: &[String]) -> String {
    targets
        .iter()
        .map(|t| format!("'{t}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Check if error rejects one or more targets.
    ///
    /// # Examples
    ///
    /// ```
    /// use targetree::Error;
    ///
    /// let err = Error::InvalidTarget {
    ///     targets: vec![".".to_string()],
    ///     reason: "no path components below the root".to_string(),
    /// };
    /// assert!(err.is_invalid_target());
    /// ```
    #[must_use]
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, Self::InvalidTarget { .. })
    }

    /// The rejected targets, if this is an [`Error::InvalidTarget`].
    #[must_use]
    pub fn invalid_targets(&self) -> &[String] {
        match self {
            Self::InvalidTarget { targets, .. } => targets,
            _ => &[],
        }
    }
}
