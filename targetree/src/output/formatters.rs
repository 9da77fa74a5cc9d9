//! Output formatter implementations.

use crate::tree::{Node, Tree};
use crate::{Error, Result};

use super::{TreeFormatter, TreeView};

/// Formatter producing indented, human-readable text.
///
/// Leaves print as `name -> path`. Internal nodes print as `name/` followed
/// by their metadata path in brackets, or `(synthetic)` when they have none.
/// Top-level lines also show the rendered root.
pub struct HumanFormatter;

impl HumanFormatter {
    fn describe(name: &str, node: &Node) -> String {
        match node {
            Node::Leaf { path } => format!("{name} -> {path}"),
            Node::Internal {
                file_info_path: Some(fip),
                ..
            } => format!("{name}/ [{fip}]"),
            Node::Internal {
                file_info_path: None,
                ..
            } => format!("{name}/ (synthetic)"),
        }
    }

    fn push_children(node: &Node, depth: usize, lines: &mut Vec<String>) {
        if let Some(children) = node.children() {
            for (name, child) in children {
                lines.push(format!(
                    "{}{}",
                    "  ".repeat(depth),
                    Self::describe(name, child)
                ));
                Self::push_children(child, depth + 1, lines);
            }
        }
    }
}

impl TreeFormatter for HumanFormatter {
    fn format(&self, tree: &Tree) -> Result<String> {
        if tree.is_empty() {
            return Ok("No targets resolved.".to_string());
        }

        let mut lines = Vec::new();
        for (name, entry) in tree.entries() {
            let root = entry.root().to_path_string(tree.separator());
            lines.push(format!(
                "{} (root {root})",
                Self::describe(name, entry.node())
            ));
            Self::push_children(entry.node(), 1, &mut lines);
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter producing pretty-printed JSON.
pub struct JsonFormatter;

impl TreeFormatter for JsonFormatter {
    fn format(&self, tree: &Tree) -> Result<String> {
        serde_json::to_string_pretty(&TreeView::from(tree)).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter producing YAML.
pub struct YamlFormatter;

impl TreeFormatter for YamlFormatter {
    fn format(&self, tree: &Tree) -> Result<String> {
        Ok(serde_yaml::to_string(&TreeView::from(tree))?)
    }
}
