//! Data-sharing language detection at sentence level.

use rustc_hash::FxHashSet;

use super::sentences;

/// Upper bound on reported data-sharing mentions per document.
pub const MAX_DATA_SHARING_MENTIONS: usize = 15;

/// Phrases indicating that data is shared, disclosed, or transferred.
static DATA_SHARING_PHRASES: &[&str] = &[
    "share your data",
    "share your information",
    "share personal data",
    "share personal information",
    "we share",
    "shared with",
    "third parties",
    "third-party",
    "may disclose",
    "disclose your",
    "data processors",
    "data processor",
    "sell your data",
    "transfer your data",
    "transfer of data",
    "advertising partners",
    "analytics providers",
];

/// Scan sentences for data-sharing language and report the matching
/// sentences (trimmed, exact-deduplicated) in document order, capped at
/// [`MAX_DATA_SHARING_MENTIONS`].
pub fn detect_data_sharing(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut mentions = Vec::new();
    for sentence in sentences::split(text) {
        let lowered = sentence.to_lowercase();
        if DATA_SHARING_PHRASES.iter().any(|phrase| lowered.contains(phrase))
            && seen.insert(sentence.to_string())
        {
            mentions.push(sentence.to_string());
            if mentions.len() == MAX_DATA_SHARING_MENTIONS {
                break;
            }
        }
    }
    mentions
}
