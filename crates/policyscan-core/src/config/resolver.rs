//! Merges defaults with caller overrides into a [`ResolvedConfig`].

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::defaults::ConfigDefaults;
use super::types::ResolvedConfig;
use crate::errors::ConfigError;

/// Partial configuration supplied by the caller.
///
/// A `tech_keywords` category present here replaces the default list for that
/// category; categories unknown to the defaults are added verbatim. The
/// `gcp_*` and `cloud_cert_patterns` lists are appended to the defaults since
/// those vocabularies are meant to be extended. Unknown top-level keys are
/// ignored for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub tech_keywords: Option<BTreeMap<String, Vec<String>>>,
    pub gcp_services: Option<Vec<String>>,
    pub gcp_programs: Option<Vec<String>>,
    pub cloud_cert_patterns: Option<Vec<String>>,
    pub case_sensitive: Option<bool>,
}

impl ConfigOverrides {
    /// Parse overrides from an already-decoded JSON value.
    ///
    /// A value whose type does not match the expected shape (e.g. a string
    /// where a sequence of strings is expected) fails with
    /// [`ConfigError::InvalidShape`].
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value)
            .map_err(|err| ConfigError::InvalidShape { message: err.to_string() })
    }
}

/// Merge `defaults` and `overrides` into one immutable ruleset.
///
/// Keyword lists are normalized here: entries are trimmed, empties dropped,
/// duplicates removed (first occurrence wins), and everything is lowercased
/// unless `case_sensitive` resolves to true. Certification patterns are
/// compiled case-insensitively; an uncompilable pattern fails with
/// [`ConfigError::InvalidPattern`] rather than at first use.
pub fn resolve(
    defaults: ConfigDefaults,
    overrides: &ConfigOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let case_sensitive = overrides.case_sensitive.unwrap_or(defaults.case_sensitive);

    let mut tech_keywords = defaults.tech_keywords;
    if let Some(custom) = &overrides.tech_keywords {
        for (category, list) in custom {
            tech_keywords.insert(category.clone(), list.clone());
        }
    }
    let tech_keywords = tech_keywords
        .into_iter()
        .map(|(category, list)| (category, normalize(list, case_sensitive)))
        .collect();

    let mut cloud_services = defaults.gcp_services;
    if let Some(extra) = &overrides.gcp_services {
        cloud_services.extend(extra.iter().cloned());
    }
    let mut cloud_programs = defaults.gcp_programs;
    if let Some(extra) = &overrides.gcp_programs {
        cloud_programs.extend(extra.iter().cloned());
    }

    let mut pattern_sources = defaults.cloud_cert_patterns;
    if let Some(extra) = &overrides.cloud_cert_patterns {
        pattern_sources.extend(extra.iter().cloned());
    }
    let cloud_cert_patterns = pattern_sources
        .iter()
        .map(|source| compile_cert_pattern(source))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedConfig {
        tech_keywords,
        // Cloud vocabularies are matched case-insensitively regardless of
        // the keyword setting, so they are always stored lowercased.
        cloud_services: normalize(cloud_services, false),
        cloud_programs: normalize(cloud_programs, false),
        cloud_cert_patterns,
        case_sensitive,
    })
}

fn compile_cert_pattern(source: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|err| ConfigError::InvalidPattern { pattern: source.to_string(), source: err })
}

/// Trim, drop empties, apply case policy, and deduplicate preserving the
/// first occurrence.
fn normalize(list: Vec<String>, case_sensitive: bool) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::with_capacity(list.len());
    for entry in list {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let entry = if case_sensitive { entry.to_string() } else { entry.to_lowercase() };
        if seen.insert(entry.clone()) {
            out.push(entry);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_overrides_keeps_defaults() {
        let config = resolve(ConfigDefaults::builtin(), &ConfigOverrides::default()).unwrap();
        assert!(config.tech_keywords["platforms"].contains(&"aws".to_string()));
        assert!(!config.case_sensitive);
    }

    #[test]
    fn tech_category_override_replaces() {
        let overrides = ConfigOverrides {
            tech_keywords: Some(
                [("platforms".to_string(), vec!["digitalocean".to_string()])]
                    .into_iter()
                    .collect(),
            ),
            ..Default::default()
        };
        let config = resolve(ConfigDefaults::builtin(), &overrides).unwrap();
        assert_eq!(config.tech_keywords["platforms"], vec!["digitalocean"]);
    }

    #[test]
    fn new_category_added_verbatim() {
        let overrides = ConfigOverrides {
            tech_keywords: Some(
                [("payments".to_string(), vec!["Adyen".to_string(), "adyen".to_string()])]
                    .into_iter()
                    .collect(),
            ),
            ..Default::default()
        };
        let config = resolve(ConfigDefaults::builtin(), &overrides).unwrap();
        // Lowercased and deduplicated under the default case policy.
        assert_eq!(config.tech_keywords["payments"], vec!["adyen"]);
    }

    #[test]
    fn gcp_lists_append() {
        let defaults = ConfigDefaults::builtin();
        let default_len = defaults.gcp_services.len();
        let overrides = ConfigOverrides {
            gcp_services: Some(vec!["Cloud Tasks".to_string()]),
            ..Default::default()
        };
        let config = resolve(defaults, &overrides).unwrap();
        assert_eq!(config.cloud_services.len(), default_len + 1);
        assert!(config.cloud_services.contains(&"cloud tasks".to_string()));
    }

    #[test]
    fn invalid_cert_pattern_is_config_error() {
        let overrides = ConfigOverrides {
            cloud_cert_patterns: Some(vec!["certified [".to_string()]),
            ..Default::default()
        };
        let err = resolve(ConfigDefaults::builtin(), &overrides).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn from_json_rejects_wrong_shape() {
        let err = ConfigOverrides::from_json(json!({ "tech_keywords": "not-a-map" })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidShape { .. }));
    }

    #[test]
    fn from_json_ignores_unknown_keys() {
        let overrides = ConfigOverrides::from_json(json!({
            "case_sensitive": true,
            "some_future_key": [1, 2, 3],
        }))
        .unwrap();
        assert_eq!(overrides.case_sensitive, Some(true));
    }

    #[test]
    fn case_sensitive_keeps_keyword_case() {
        let overrides = ConfigOverrides {
            case_sensitive: Some(true),
            tech_keywords: Some(
                [("platforms".to_string(), vec!["AWS".to_string()])].into_iter().collect(),
            ),
            ..Default::default()
        };
        let config = resolve(ConfigDefaults::builtin(), &overrides).unwrap();
        assert_eq!(config.tech_keywords["platforms"], vec!["AWS"]);
    }
}
