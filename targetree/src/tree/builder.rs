//! Merging targets into a tree.
//!
//! Targets are processed strictly in input order:
//!
//! 1. Each target is cleaned; exact duplicates are dropped.
//! 2. Its boundary and components are computed. A target with no components
//!    beyond its virtual prefix, or one relative to a drive's current
//!    directory, is invalid.
//! 3. The first component claims a top-level slot. A slot with the same name
//!    but a different boundary forces a `-1`, `-2`, ... suffix.
//! 4. The remaining components are created or reused below the slot and the
//!    final one records the target path.
//! 5. Nodes that were requested as targets *and* hold separately requested
//!    descendants are resolved according to the [`AncestorPolicy`].

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fs::DirectoryLister;
use crate::path::{path_components, root_boundary, Boundary, Components, PathSyntax};
use crate::tree::{Entry, Node, Tree};

/// How to resolve a target that is an ancestor of other targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AncestorPolicy {
    /// List the ancestor directory and include every entry in it, keeping
    /// the separately requested descendants in place.
    #[default]
    Expand,
    /// Keep the ancestor as a single leaf and drop its descendants; the
    /// directory walk will rediscover them.
    Absorb,
}

/// Builds [`Tree`]s from target lists.
///
/// # Examples
///
/// ```
/// use targetree::fs::MemoryLister;
/// use targetree::path::PosixSyntax;
/// use targetree::tree::{AncestorPolicy, Node, TreeResolver};
///
/// let lister = MemoryLister::from_files(&PosixSyntax, ["foo/work", "foo/other"]);
/// let resolver = TreeResolver::new(&PosixSyntax, &lister);
///
/// let tree = resolver.resolve(&["foo/work", "foo"]).unwrap();
/// let foo = tree.get("foo").unwrap().node();
/// assert_eq!(foo.file_info_path(), Some("foo"));
/// assert_eq!(foo.child("other"), Some(&Node::leaf("foo/other")));
///
/// let tree = resolver
///     .with_ancestor_policy(AncestorPolicy::Absorb)
///     .resolve(&["foo/work", "foo"])
///     .unwrap();
/// assert_eq!(tree.get("foo").unwrap().node(), &Node::leaf("foo"));
/// ```
pub struct TreeResolver<'a> {
    syntax: &'a dyn PathSyntax,
    lister: &'a dyn DirectoryLister,
    policy: AncestorPolicy,
}

impl<'a> TreeResolver<'a> {
    /// Create a resolver with the default [`AncestorPolicy`].
    #[must_use]
    pub fn new(syntax: &'a dyn PathSyntax, lister: &'a dyn DirectoryLister) -> Self {
        Self {
            syntax,
            lister,
            policy: AncestorPolicy::default(),
        }
    }

    /// Set the ancestor policy.
    #[must_use]
    pub fn with_ancestor_policy(mut self, policy: AncestorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured ancestor policy.
    #[must_use]
    pub fn ancestor_policy(&self) -> AncestorPolicy {
        self.policy
    }

    /// Resolve `targets` into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTarget`] naming every target that has nothing
    /// below its own root, and [`Error::ListDirectory`] if an ancestor
    /// directory cannot be listed. No partial tree is returned.
    pub fn resolve<S: AsRef<str>>(&self, targets: &[S]) -> Result<Tree> {
        let prepared = self.prepare(targets)?;
        log::debug!("merging {} target(s)", prepared.len());

        let mut entries: BTreeMap<String, PendingEntry> = BTreeMap::new();
        for target in &prepared {
            self.insert(&mut entries, target);
        }

        let mut tree = Tree::new(self.syntax.separator());
        for (name, entry) in entries {
            let node = self.finish(entry.node)?;
            tree.entries.insert(name, Entry::new(entry.root, node));
        }
        Ok(tree)
    }

    /// Clean, dedupe and decompose every target, collecting invalid ones.
    fn prepare<S: AsRef<str>>(&self, targets: &[S]) -> Result<Vec<Prepared>> {
        let mut seen = HashSet::new();
        let mut prepared = Vec::with_capacity(targets.len());
        let mut invalid = Vec::new();

        for raw in targets {
            let raw = raw.as_ref();
            let path = self.syntax.clean(raw);
            if !seen.insert(path.clone()) {
                log::trace!("dropping duplicate target {raw}");
                continue;
            }

            let boundary = root_boundary(self.syntax, &path);
            let components = path_components(self.syntax, &path, false);
            if components.real_names().is_empty() {
                invalid.push(raw.to_string());
                continue;
            }

            prepared.push(Prepared {
                path,
                boundary,
                components,
            });
        }

        if invalid.is_empty() {
            Ok(prepared)
        } else {
            Err(Error::InvalidTarget {
                targets: invalid,
                reason: "target denotes only its own root".to_string(),
            })
        }
    }

    fn insert(&self, entries: &mut BTreeMap<String, PendingEntry>, target: &Prepared) {
        let names = target.components.names();
        let virtual_count = target.components.virtual_count();
        let last = names.len() - 1;

        let slot = slot_name(entries, &names[0], &target.boundary);
        log::trace!("target {} uses top-level slot {slot}", target.path);

        let mut dir = self.syntax.render(&target.boundary);
        let entry = entries.entry(slot).or_insert_with(|| PendingEntry {
            root: target.boundary.clone(),
            node: PendingNode::default(),
        });
        let mut node = &mut entry.node;

        for (index, name) in names.iter().enumerate() {
            if index > 0 {
                node = node.children.entry(name.clone()).or_default();
            }

            if index == last {
                node.path = Some(target.path.clone());
                if node.file_info_path.is_none() {
                    node.file_info_path = Some(target.path.clone());
                }
            } else if index >= virtual_count {
                dir = self.syntax.join(&dir, name);
                node.file_info_path = Some(dir.clone());
            } else if index + 1 == virtual_count {
                // the volume root itself can be stat'ed, a UNC host cannot
                node.file_info_path = Some(dir.clone());
            }
        }
    }

    fn finish(&self, mut node: PendingNode) -> Result<Node> {
        if let Some(path) = node.path.take() {
            if node.children.is_empty() {
                return Ok(Node::Leaf { path });
            }

            match self.policy {
                AncestorPolicy::Absorb => {
                    log::debug!(
                        "{path} absorbs {} descendant target(s)",
                        node.children.len()
                    );
                    return Ok(Node::Leaf { path });
                }
                AncestorPolicy::Expand => self.expand(&path, &mut node.children)?,
            }
        }

        let mut children = BTreeMap::new();
        for (name, child) in node.children {
            children.insert(name, self.finish(child)?);
        }
        Ok(Node::Internal {
            file_info_path: node.file_info_path,
            children,
        })
    }

    /// Give every entry of `dir` a target path, adding the ones not yet in
    /// `children` as new leaves.
    fn expand(&self, dir: &str, children: &mut BTreeMap<String, PendingNode>) -> Result<()> {
        let names = self
            .lister
            .read_dir_names(dir)
            .map_err(|source| Error::ListDirectory {
                path: dir.to_string(),
                source,
            })?;
        log::debug!("expanding {dir} into {} entries", names.len());

        for name in names {
            let path = self.syntax.join(dir, &name);
            let child = children.entry(name).or_default();
            if child.file_info_path.is_none() {
                child.file_info_path = Some(path.clone());
            }
            child.path = Some(path);
        }
        Ok(())
    }
}

/// Resolve `targets` with the default [`AncestorPolicy`].
///
/// # Errors
///
/// See [`TreeResolver::resolve`].
pub fn build_tree<S: AsRef<str>>(
    syntax: &dyn PathSyntax,
    lister: &dyn DirectoryLister,
    targets: &[S],
) -> Result<Tree> {
    TreeResolver::new(syntax, lister).resolve(targets)
}

struct Prepared {
    path: String,
    boundary: Boundary,
    components: Components,
}

#[derive(Default)]
struct PendingNode {
    path: Option<String>,
    file_info_path: Option<String>,
    children: BTreeMap<String, PendingNode>,
}

struct PendingEntry {
    root: Boundary,
    node: PendingNode,
}

/// Pick the top-level slot for `name` anchored to `root`.
///
/// Returns the first of `name`, `name-1`, `name-2`, ... that is free or
/// already anchored to an equal root.
fn slot_name(entries: &BTreeMap<String, PendingEntry>, name: &str, root: &Boundary) -> String {
    let mut candidate = name.to_string();
    let mut suffix = 0usize;
    while let Some(entry) = entries.get(&candidate) {
        if entry.root == *root {
            break;
        }
        suffix += 1;
        candidate = format!("{name}-{suffix}");
    }
    candidate
}
