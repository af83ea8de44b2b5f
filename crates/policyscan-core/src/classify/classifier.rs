//! Technology keyword detection by category.
//!
//! One Aho-Corasick automaton over every configured keyword; a single pass
//! over the text answers which keywords occur at all, and results are then
//! reported per category in configured keyword order.

use std::borrow::Cow;
use std::collections::BTreeMap;

use aho_corasick::AhoCorasick;
use rustc_hash::FxHashSet;

use crate::config::ResolvedConfig;
use crate::errors::ConfigError;

/// Classifies text against the resolved keyword taxonomy.
pub struct TechnologyClassifier {
    automaton: AhoCorasick,
    /// Categories in output order, each with its keyword list. Pattern ids in
    /// the automaton index this flattened layout.
    categories: Vec<(String, Vec<String>)>,
    case_sensitive: bool,
}

impl TechnologyClassifier {
    /// Build the automaton from an already-normalized configuration.
    pub fn new(config: &ResolvedConfig) -> Result<Self, ConfigError> {
        let categories: Vec<(String, Vec<String>)> = config
            .tech_keywords
            .iter()
            .map(|(category, keywords)| (category.clone(), keywords.clone()))
            .collect();

        let patterns: Vec<&str> = categories
            .iter()
            .flat_map(|(_, keywords)| keywords.iter().map(String::as_str))
            .collect();
        let automaton = AhoCorasick::new(&patterns)
            .map_err(|err| ConfigError::Automaton { message: err.to_string() })?;

        Ok(Self { automaton, categories, case_sensitive: config.case_sensitive })
    }

    /// Scan `text` and return matched keywords per category.
    ///
    /// Keywords keep their configured order, not text-occurrence order, so
    /// output is stable regardless of where a term appears in the document.
    /// Categories with no match are omitted. Multi-word keywords match only
    /// as contiguous substrings.
    pub fn classify(&self, text: &str) -> BTreeMap<String, Vec<String>> {
        let haystack: Cow<'_, str> =
            if self.case_sensitive { Cow::Borrowed(text) } else { Cow::Owned(text.to_lowercase()) };

        let mut matched = FxHashSet::default();
        for hit in self.automaton.find_overlapping_iter(haystack.as_ref()) {
            matched.insert(hit.pattern().as_usize());
        }

        let mut result = BTreeMap::new();
        let mut pattern_id = 0;
        for (category, keywords) in &self.categories {
            let mut found = Vec::new();
            for keyword in keywords {
                if matched.contains(&pattern_id) {
                    found.push(keyword.clone());
                }
                pattern_id += 1;
            }
            if !found.is_empty() {
                result.insert(category.clone(), found);
            }
        }
        result
    }
}
