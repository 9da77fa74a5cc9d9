//! Output formatting for resolved target trees.
//!
//! This module renders a [`Tree`] as indented human-readable text, JSON or
//! YAML. The structured formats share a serializable view of the tree in
//! which every entry carries its rendered root, leaves carry their path, and
//! internal nodes carry their metadata path and children.

mod formatters;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;
use crate::tree::{Node, Tree};
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for formatting resolved trees into different output formats.
pub trait TreeFormatter {
    /// Format the given tree into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, tree: &Tree) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use targetree::config::OutputFormat;
    /// use targetree::tree::Tree;
    ///
    /// let formatter = OutputFormat::Human.create_formatter();
    /// assert_eq!(formatter.format(&Tree::new('/')).unwrap(), "No targets resolved.");
    /// ```
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn TreeFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

/// Serializable view of a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeView {
    /// Top-level entries keyed by name.
    pub entries: BTreeMap<String, EntryView>,
}

/// Serializable view of a top-level entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    /// The rendered root boundary.
    pub root: String,
    /// The entry's subtree.
    #[serde(flatten)]
    pub node: NodeView,
}

/// Serializable view of a [`Node`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    /// Target path of a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Metadata path of a non-synthetic internal node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_info_path: Option<String>,
    /// Children of an internal node.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, NodeView>,
}

impl From<&Node> for NodeView {
    fn from(node: &Node) -> Self {
        match node {
            Node::Leaf { path } => Self {
                path: Some(path.clone()),
                ..Self::default()
            },
            Node::Internal {
                file_info_path,
                children,
            } => Self {
                path: None,
                file_info_path: file_info_path.clone(),
                children: children
                    .iter()
                    .map(|(name, child)| (name.clone(), Self::from(child)))
                    .collect(),
            },
        }
    }
}

impl From<&Tree> for TreeView {
    fn from(tree: &Tree) -> Self {
        let entries = tree
            .entries()
            .iter()
            .map(|(name, entry)| {
                let view = EntryView {
                    root: entry.root().to_path_string(tree.separator()),
                    node: NodeView::from(entry.node()),
                };
                (name.clone(), view)
            })
            .collect();
        Self { entries }
    }
}
