//! Sentence splitting shared by the sentence-level detectors.

use once_cell::sync::Lazy;
use regex::Regex;

/// A sentence ends at `.`, `!`, or `?` followed by whitespace or end of text.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?](?:\s+|$)").expect("Invalid sentence pattern"));

/// Split text into trimmed, non-empty sentences.
pub fn split(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        let sentence = text[start..boundary.start()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = boundary.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}
