//! API reference detection with context windows.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on collected API snippets per document.
pub const MAX_API_REFERENCES: usize = 10;

/// Characters of context kept on each side of a matched term.
const CONTEXT_RADIUS: usize = 50;

static API_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:api|rest|graphql|webhook|endpoint|sdk)s?\b")
        .expect("Invalid API term pattern")
});

/// Scan left to right for API-indicator terms and record a context snippet
/// per match: 50 characters before and after the term, clipped at document
/// boundaries. Overlapping windows are kept; collection stops after
/// [`MAX_API_REFERENCES`] snippets.
pub fn detect_api_references(text: &str) -> Vec<String> {
    let mut snippets = Vec::new();
    for mat in API_TERM.find_iter(text) {
        if snippets.len() == MAX_API_REFERENCES {
            break;
        }
        let snippet = context_window(text, mat.start(), mat.end());
        snippets.push(snippet.trim().to_string());
    }
    snippets
}

/// Window of `CONTEXT_RADIUS` characters (not bytes) around `start..end`,
/// clipped to the text. Never splits a UTF-8 code point.
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_RADIUS - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_RADIUS)
        .map(|(idx, _)| end + idx)
        .unwrap_or(text.len());
    &text[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_terms_with_context() {
        let refs = detect_api_references("Our REST API connects to various services.");
        assert_eq!(refs.len(), 2);
        assert!(refs[0].contains("REST"));
        assert!(refs[1].contains("API"));
    }

    #[test]
    fn window_is_clipped_at_boundaries() {
        let refs = detect_api_references("api");
        assert_eq!(refs, vec!["api"]);
    }

    #[test]
    fn window_spans_fifty_chars_each_side() {
        let text = format!("{}webhook{}", "a".repeat(80), "b".repeat(80));
        let refs = detect_api_references(&text);
        assert_eq!(refs[0].len(), 50 + "webhook".len() + 50);
    }

    #[test]
    fn caps_at_ten() {
        let text = "endpoint. ".repeat(25);
        assert_eq!(detect_api_references(&text).len(), MAX_API_REFERENCES);
    }

    #[test]
    fn window_respects_multibyte_text() {
        let text = format!("{}api{}", "é".repeat(60), "ü".repeat(60));
        let refs = detect_api_references(&text);
        assert_eq!(refs[0].chars().count(), 50 + 3 + 50);
    }

    #[test]
    fn matches_plural_forms() {
        let refs = detect_api_references("We expose several webhooks and SDKs.");
        assert_eq!(refs.len(), 2);
    }
}
