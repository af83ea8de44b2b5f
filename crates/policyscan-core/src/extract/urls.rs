//! URL extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z]{2,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*")
        .expect("Invalid URL pattern")
});

/// Extract `http://`/`https://` URLs, deduplicated by exact string in
/// first-seen order. Trailing sentence punctuation is not part of the URL.
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut urls = Vec::new();
    for mat in URL_REGEX.find_iter(text) {
        let url = mat.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?', ')']);
        if seen.insert(url.to_string()) {
            urls.push(url.to_string());
        }
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_dedups() {
        let text = "See https://example.com/privacy and https://example.com/privacy again.";
        assert_eq!(extract_urls(text), vec!["https://example.com/privacy"]);
    }

    #[test]
    fn trailing_period_not_captured() {
        let urls = extract_urls("Visit https://example.com/privacy.");
        assert_eq!(urls, vec!["https://example.com/privacy"]);
    }

    #[test]
    fn keeps_first_seen_order() {
        let urls = extract_urls("https://a.com then http://b.org/path?q=1");
        assert_eq!(urls, vec!["https://a.com", "http://b.org/path?q=1"]);
    }

    #[test]
    fn empty_input() {
        assert!(extract_urls("").is_empty());
    }
}
