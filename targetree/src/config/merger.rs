//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! with special handling for the accumulated `targets` and `files_from`
//! lists.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use targetree::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Yaml), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Yaml));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if Some
    /// - `targets` and `files_from`: accumulated, lower precedence first
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.syntax.is_some() {
            target.syntax = source.syntax;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.ancestor_policy.is_some() {
            target.ancestor_policy = source.ancestor_policy;
        }

        Self::accumulate(&mut target.targets, source.targets.as_ref());
        Self::accumulate(&mut target.files_from, source.files_from.as_ref());
    }

    fn accumulate(target: &mut Option<Vec<String>>, source: Option<&Vec<String>>) {
        if let Some(items) = source {
            target.get_or_insert_with(Vec::new).extend(items.iter().cloned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{OutputFormat, SyntaxKind};
    use crate::tree::AncestorPolicy;
    use std::path::PathBuf;

    fn make_source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("test-{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_scalar_fields() {
        let mut target = Config::default();
        let source = Config {
            syntax: Some(SyntaxKind::Windows),
            ancestor_policy: Some(AncestorPolicy::Absorb),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.syntax, Some(SyntaxKind::Windows));
        assert_eq!(target.ancestor_policy, Some(AncestorPolicy::Absorb));
    }

    #[test]
    fn test_merge_overwrites() {
        let mut target = Config {
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let source = Config {
            output_format: Some(OutputFormat::Human),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.output_format, Some(OutputFormat::Human));
    }

    #[test]
    fn test_merge_targets_accumulate() {
        let mut target = Config {
            targets: Some(vec!["a".to_string()]),
            ..Default::default()
        };
        let source = Config {
            targets: Some(vec!["b".to_string(), "c".to_string()]),
            files_from: Some(vec!["list.txt".to_string()]),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(
            target.targets,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(target.files_from, Some(vec!["list.txt".to_string()]));
    }

    #[test]
    fn test_merge_none_values_dont_overwrite() {
        let mut target = Config {
            syntax: Some(SyntaxKind::Posix),
            targets: Some(vec!["keep".to_string()]),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.syntax, Some(SyntaxKind::Posix));
        assert_eq!(target.targets, Some(vec!["keep".to_string()]));
    }

    #[test]
    fn test_merge_multiple_sources() {
        let sources = vec![
            make_source(
                1,
                Config {
                    syntax: Some(SyntaxKind::Posix),
                    targets: Some(vec!["user".to_string()]),
                    ..Default::default()
                },
            ),
            make_source(
                2,
                Config {
                    syntax: Some(SyntaxKind::Windows),
                    targets: Some(vec!["project".to_string()]),
                    ..Default::default()
                },
            ),
        ];

        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.syntax, Some(SyntaxKind::Windows));
        assert_eq!(
            merged.targets,
            Some(vec!["user".to_string(), "project".to_string()])
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn targets_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
            proptest::option::of(prop::collection::vec("[a-z/.]{1,12}", 0..5))
        }

        proptest! {
            /// Merging an empty config changes nothing
            #[test]
            fn prop_merge_empty_is_right_identity(
                targets in targets_strategy(),
                files_from in targets_strategy(),
            ) {
                let mut config = Config {
                    targets,
                    files_from,
                    syntax: Some(SyntaxKind::Posix),
                    ..Default::default()
                };
                let original = config.clone();
                ConfigMerger::merge_into(&mut config, &Config::default());
                prop_assert_eq!(config, original);
            }

            /// Accumulated lists keep every entry from both sides in order
            #[test]
            fn prop_merge_targets_concatenate(
                low in targets_strategy(),
                high in targets_strategy(),
            ) {
                let mut config = Config { targets: low.clone(), ..Default::default() };
                let source = Config { targets: high.clone(), ..Default::default() };
                ConfigMerger::merge_into(&mut config, &source);

                let mut expected: Vec<String> = low.clone().unwrap_or_default();
                expected.extend(high.clone().unwrap_or_default());
                prop_assert_eq!(config.targets.unwrap_or_default(), expected);
            }
        }
    }
}
