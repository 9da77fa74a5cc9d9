//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat, SyntaxKind};
use super::validator::ConfigValidator;
use crate::tree::AncestorPolicy;
use proptest::prelude::*;

fn syntax_strategy() -> impl Strategy<Value = SyntaxKind> {
    prop_oneof![
        Just(SyntaxKind::Host),
        Just(SyntaxKind::Posix),
        Just(SyntaxKind::Windows),
    ]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Human),
        Just(OutputFormat::Json),
        Just(OutputFormat::Yaml),
    ]
}

fn policy_strategy() -> impl Strategy<Value = AncestorPolicy> {
    prop_oneof![Just(AncestorPolicy::Expand), Just(AncestorPolicy::Absorb)]
}

fn list_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec("[a-z0-9_./-]{1,16}", 0..6))
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        list_strategy(),
        list_strategy(),
        prop::option::of(syntax_strategy()),
        prop::option::of(format_strategy()),
        prop::option::of(policy_strategy()),
    )
        .prop_map(
            |(targets, files_from, syntax, output_format, ancestor_policy)| Config {
                targets,
                files_from,
                syntax,
                output_format,
                ancestor_policy,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Scalar settings from the higher layer win whenever present
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.syntax, high.syntax.or(low.syntax));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.ancestor_policy, high.ancestor_policy.or(low.ancestor_policy));
    }

    // Accumulated lists never lose entries
    #[test]
    fn config_merge_lists_accumulate(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let count = |c: &Config| c.targets.as_ref().map_or(0, Vec::len);
        prop_assert_eq!(count(&merged), count(&low) + count(&high));
    }

    // Generated configs survive a YAML round trip and validate
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert!(ConfigValidator::validate(&parsed).is_ok());
        prop_assert_eq!(parsed, config);
    }
}
