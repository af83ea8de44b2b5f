//! Resolved configuration types.

use std::collections::BTreeMap;

use regex::Regex;

/// The fully merged ruleset for one analysis run.
///
/// Built once by [`resolve`](super::resolve) and never mutated afterwards;
/// [`PolicyAnalyzer`](crate::analysis::PolicyAnalyzer) takes ownership, so a
/// live engine's vocabulary cannot be changed from outside. Sharing a clone
/// across threads is safe.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Keyword taxonomy: category name to keyword list. Keywords keep their
    /// configured order and contain no duplicates; they are lowercased when
    /// `case_sensitive` is false.
    pub tech_keywords: BTreeMap<String, Vec<String>>,
    /// Cloud provider service names, matched as case-insensitive substrings.
    pub cloud_services: Vec<String>,
    /// Cloud provider program/community names, matched as case-insensitive
    /// substrings.
    pub cloud_programs: Vec<String>,
    /// Certification patterns, compiled case-insensitively at resolution.
    pub cloud_cert_patterns: Vec<Regex>,
    /// When false (the default), keyword matching runs over lowercased text.
    pub case_sensitive: bool,
}
