//! The resolved target tree.
//!
//! A [`Tree`] is a forest: each top-level [`Entry`] is anchored to a
//! [`Boundary`] and holds a [`Node`]. A node is either a leaf naming a
//! literal object to back up, or an internal node grouping children.
//!
//! Internal nodes with a `file_info_path` are real directories whose
//! metadata should be recorded; those without one are synthetic groupings
//! (a UNC host, for example) that contribute no metadata.
//!
//! # Examples
//!
//! ```
//! use targetree::fs::MemoryLister;
//! use targetree::path::{Boundary, PosixSyntax};
//! use targetree::tree::build_tree;
//!
//! let lister = MemoryLister::new();
//! let tree = build_tree(&PosixSyntax, &lister, &["foo/user1", "../work/other"]).unwrap();
//!
//! let foo = tree.get("foo").unwrap();
//! assert_eq!(foo.root(), &Boundary::CURRENT);
//! assert_eq!(foo.node().file_info_path(), Some("foo"));
//!
//! let work = tree.get("work").unwrap();
//! assert_eq!(work.root(), &Boundary::Relative { ascend: 1 });
//! assert_eq!(tree.leaf_paths(), ["foo/user1", "../work/other"]);
//! ```

mod builder;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::collections::BTreeMap;

use crate::path::Boundary;

pub use builder::{build_tree, AncestorPolicy, TreeResolver};

/// A node of the resolved tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A literal object to back up.
    Leaf {
        /// The cleaned target path.
        path: String,
    },

    /// A directory grouping separately resolved children.
    Internal {
        /// Path to stat for the directory's own metadata; `None` for
        /// synthetic grouping nodes.
        file_info_path: Option<String>,
        /// Children keyed by name; never empty in a resolved tree.
        children: BTreeMap<String, Node>,
    },
}

impl Node {
    /// Create a leaf node.
    #[must_use]
    pub fn leaf(path: impl Into<String>) -> Self {
        Self::Leaf { path: path.into() }
    }

    /// Create an internal node from `(name, child)` pairs.
    #[must_use]
    pub fn internal<I, S>(file_info_path: Option<&str>, children: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        Self::Internal {
            file_info_path: file_info_path.map(str::to_string),
            children: children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    /// The target path, if this is a leaf.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Leaf { path } => Some(path),
            Self::Internal { .. } => None,
        }
    }

    /// The metadata path, if this is a non-synthetic internal node.
    #[must_use]
    pub fn file_info_path(&self) -> Option<&str> {
        match self {
            Self::Internal { file_info_path, .. } => file_info_path.as_deref(),
            Self::Leaf { .. } => None,
        }
    }

    /// The children, if this is an internal node.
    #[must_use]
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Self::Internal { children, .. } => Some(children),
            Self::Leaf { .. } => None,
        }
    }

    /// Look up a direct child by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().and_then(|children| children.get(name))
    }

    /// Whether this is a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Whether this is a synthetic grouping node.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        matches!(
            self,
            Self::Internal {
                file_info_path: None,
                ..
            }
        )
    }

    fn collect_leaf_paths<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Leaf { path } => out.push(path),
            Self::Internal { children, .. } => {
                for child in children.values() {
                    child.collect_leaf_paths(out);
                }
            }
        }
    }
}

/// A top-level slot of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    root: Boundary,
    node: Node,
}

impl Entry {
    /// Create an entry anchored to `root`.
    #[must_use]
    pub fn new(root: Boundary, node: Node) -> Self {
        Self { root, node }
    }

    /// The boundary this subtree is anchored to.
    #[must_use]
    pub fn root(&self) -> &Boundary {
        &self.root
    }

    /// The subtree.
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }
}

/// The resolved forest of backup targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    separator: char,
    entries: BTreeMap<String, Entry>,
}

impl Tree {
    /// Create an empty tree for a syntax with the given separator.
    #[must_use]
    pub fn new(separator: char) -> Self {
        Self {
            separator,
            entries: BTreeMap::new(),
        }
    }

    /// Add a top-level entry, replacing any entry with the same name.
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, root: Boundary, node: Node) -> Self {
        self.entries.insert(name.into(), Entry::new(root, node));
        self
    }

    /// The separator of the syntax this tree was built with.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// All top-level entries keyed by name.
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<String, Entry> {
        &self.entries
    }

    /// Look up a top-level entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The rendered root boundary of a top-level entry.
    #[must_use]
    pub fn root_path(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|entry| entry.root.to_path_string(self.separator))
    }

    /// Every leaf path, depth first in name order.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for entry in self.entries.values() {
            entry.node.collect_leaf_paths(&mut out);
        }
        out
    }
}
