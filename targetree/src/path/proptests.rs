//! Property-based tests for boundaries and components.
//!
//! The syntax module already has small property tests for cleaning. This
//! module checks how boundaries and components relate to each other.

use super::{path_components, root_boundary, Boundary, PathSyntax, PosixSyntax, WindowsSyntax};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => name_strategy(),
        1 => Just("..".to_string()),
        1 => Just(".".to_string()),
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..10).prop_map(|parts| parts.join("/"))
}

fn drive_path_strategy() -> impl Strategy<Value = (char, Vec<String>)> {
    (
        prop::char::range('a', 'z'),
        prop::collection::vec(name_strategy(), 0..6),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // The ascension count equals the number of leading ".." kept in the components
    #[test]
    fn ascension_matches_kept_components(path in relative_path_strategy()) {
        let kept = path_components(&PosixSyntax, &path, true);
        let dropped = path_components(&PosixSyntax, &path, false);
        let Boundary::Relative { ascend } = root_boundary(&PosixSyntax, &path) else {
            return Err(TestCaseError::fail("relative path with non-relative boundary"));
        };
        prop_assert_eq!(kept.len(), ascend + dropped.len());
        prop_assert!(kept.names()[..ascend].iter().all(|n| n == ".."));
    }

    // Components never contain "." or ".." once leading ascension is dropped
    #[test]
    fn dropped_components_are_plain_names(path in relative_path_strategy()) {
        for name in path_components(&PosixSyntax, &path, false).names() {
            prop_assert_ne!(name.as_str(), ".");
            prop_assert_ne!(name.as_str(), "..");
        }
    }

    // Boundary and components are unchanged by cleaning the target first
    #[test]
    fn cleaning_is_transparent(path in relative_path_strategy()) {
        let cleaned = PosixSyntax.clean(&path);
        prop_assert_eq!(root_boundary(&PosixSyntax, &path), root_boundary(&PosixSyntax, &cleaned));
        prop_assert_eq!(
            path_components(&PosixSyntax, &path, false),
            path_components(&PosixSyntax, &cleaned, false)
        );
    }

    // Forward and backward slashes decompose the same way on Windows
    #[test]
    fn windows_separators_are_interchangeable((letter, names) in drive_path_strategy()) {
        let backslashed = format!("{letter}:\\{}", names.join("\\"));
        let slashed = format!("{letter}:/{}", names.join("/"));
        prop_assert_eq!(
            path_components(&WindowsSyntax, &backslashed, false),
            path_components(&WindowsSyntax, &slashed, false)
        );
        prop_assert_eq!(
            root_boundary(&WindowsSyntax, &slashed),
            Boundary::Drive { letter }
        );
    }

    // A drive path always has exactly one virtual component
    #[test]
    fn drive_paths_have_one_virtual_component((letter, names) in drive_path_strategy()) {
        let path = format!("{letter}:\\{}", names.join("\\"));
        let components = path_components(&WindowsSyntax, &path, false);
        prop_assert_eq!(components.virtual_count(), 1);
        prop_assert_eq!(components.real_names(), names.as_slice());
    }
}
