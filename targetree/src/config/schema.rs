//! Configuration schema definitions.
//!
//! This module defines the configuration structure for targetree: default
//! targets, target list files, the path syntax and the output format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::{PathSyntax, PosixSyntax, WindowsSyntax};
use crate::tree::AncestorPolicy;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use targetree::config::{Config, SyntaxKind};
///
/// let config = Config {
///     targets: Some(vec!["/home/user".to_string()]),
///     syntax: Some(SyntaxKind::Posix),
///     ..Default::default()
/// };
/// assert_eq!(config.targets.as_ref().map(Vec::len), Some(1));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Targets to resolve when none are given on the command line.
    pub targets: Option<Vec<String>>,

    /// Files listing additional targets, one per line.
    pub files_from: Option<Vec<String>>,

    /// Path syntax used to interpret targets.
    pub syntax: Option<SyntaxKind>,

    /// Output format for resolved trees.
    pub output_format: Option<OutputFormat>,

    /// How targets that contain other targets are resolved.
    pub ancestor_policy: Option<AncestorPolicy>,
}

/// Selects a path syntax.
///
/// # Examples
///
/// ```
/// use targetree::config::SyntaxKind;
///
/// let syntax = SyntaxKind::Windows.provider();
/// assert_eq!(syntax.separator(), '\\');
/// assert_eq!("posix".parse::<SyntaxKind>().unwrap(), SyntaxKind::Posix);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxKind {
    /// The syntax of the platform the program runs on.
    #[default]
    Host,
    /// POSIX paths.
    Posix,
    /// Windows drive and UNC paths.
    Windows,
}

impl SyntaxKind {
    /// The provider implementing this syntax.
    #[must_use]
    pub fn provider(self) -> &'static dyn PathSyntax {
        match self {
            Self::Host if cfg!(windows) => &WindowsSyntax,
            Self::Host | Self::Posix => &PosixSyntax,
            Self::Windows => &WindowsSyntax,
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for SyntaxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "host" => Ok(Self::Host),
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("invalid syntax: {s} (expected host, posix or windows)")),
        }
    }
}

/// Output format for resolved trees.
///
/// # Examples
///
/// ```
/// use targetree::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented, human-readable listing.
    #[default]
    Human,
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s} (expected human, json or yaml)")),
        }
    }
}
