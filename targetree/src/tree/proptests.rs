//! Property-based tests for tree building.

use super::{build_tree, AncestorPolicy, Node, TreeResolver};
use crate::fs::MemoryLister;
use crate::path::PosixSyntax;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn relative_target_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(Just("..".to_string()), 0..3),
        prop::collection::vec(name_strategy(), 1..5),
    )
        .prop_map(|(ups, names)| {
            let mut parts = ups;
            parts.extend(names);
            parts.join("/")
        })
}

/// An ancestor, one of its descendants, unrelated siblings, and a layout
/// containing all of them.
fn ancestor_case_strategy() -> impl Strategy<Value = (String, String, Vec<String>, Vec<String>)> {
    (
        prop::collection::vec(name_strategy(), 1..4),
        prop::collection::vec(name_strategy(), 1..4),
        prop::collection::vec(name_strategy(), 0..4),
        prop::collection::vec(relative_target_strategy(), 0..4),
    )
        .prop_map(|(ancestor, below, extra, others)| {
            let ancestor_path = ancestor.join("/");
            let descendant_path = format!("{ancestor_path}/{}", below.join("/"));
            let mut files: Vec<String> = extra
                .iter()
                .map(|name| format!("{ancestor_path}/{name}"))
                .collect();
            files.push(descendant_path.clone());
            // unrelated targets must overlap neither the ancestor nor each other
            let mut others: Vec<String> = others
                .into_iter()
                .filter(|o| !o.starts_with(ancestor[0].as_str()))
                .collect();
            others.sort_unstable();
            others.dedup();
            let others = others
                .iter()
                .filter(|o| {
                    !others.iter().any(|p| {
                        p.starts_with(&format!("{o}/")) || o.starts_with(&format!("{p}/"))
                    })
                })
                .cloned()
                .collect();
            (ancestor_path, descendant_path, files, others)
        })
}

fn check_no_empty_internal(node: &Node) -> bool {
    match node {
        Node::Leaf { .. } => true,
        Node::Internal { children, .. } => {
            !children.is_empty() && children.values().all(check_no_empty_internal)
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Swapping an ancestor/descendant pair never changes the tree
    #[test]
    fn ancestor_order_independent((ancestor, descendant, files, others) in ancestor_case_strategy()) {
        let lister = MemoryLister::from_files(&PosixSyntax, &files);

        let mut first = vec![ancestor.clone(), descendant.clone()];
        first.extend(others.iter().cloned());
        let mut second = vec![descendant, ancestor];
        second.extend(others.iter().cloned());

        for policy in [AncestorPolicy::Expand, AncestorPolicy::Absorb] {
            let resolver = TreeResolver::new(&PosixSyntax, &lister).with_ancestor_policy(policy);
            let a = resolver.resolve(&first);
            let b = resolver.resolve(&second);
            prop_assert!(a.is_ok(), "{:?} failed under {:?}: {:?}", first, policy, a);
            prop_assert!(b.is_ok(), "{:?} failed under {:?}: {:?}", second, policy, b);
            prop_assert_eq!(a.ok(), b.ok());
        }
    }

    // Every valid target shows up as exactly one leaf when nothing overlaps
    #[test]
    fn disjoint_targets_become_leaves(targets in prop::collection::hash_set(relative_target_strategy(), 1..8)) {
        let targets: Vec<String> = targets.into_iter().collect();
        let overlapping = targets.iter().any(|a| {
            targets.iter().any(|b| a != b && b.starts_with(&format!("{a}/")))
        });
        prop_assume!(!overlapping);

        let tree = build_tree(&PosixSyntax, &MemoryLister::new(), &targets).unwrap();
        let mut leaves: Vec<&str> = tree.leaf_paths();
        leaves.sort_unstable();
        let mut expected: Vec<&str> = targets.iter().map(String::as_str).collect();
        expected.sort_unstable();
        prop_assert_eq!(leaves, expected);
    }

    // Resolved trees never contain an internal node without children
    #[test]
    fn internal_nodes_are_never_empty(targets in prop::collection::vec(relative_target_strategy(), 1..8)) {
        let files: Vec<String> = targets.iter().map(|t| format!("{t}/inner")).collect();
        let lister = MemoryLister::from_files(&PosixSyntax, &files);
        let tree = build_tree(&PosixSyntax, &lister, &targets).unwrap();
        for entry in tree.entries().values() {
            prop_assert!(check_no_empty_internal(entry.node()));
        }
    }
}
