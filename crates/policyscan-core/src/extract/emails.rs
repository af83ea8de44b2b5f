//! Email address extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b").expect("Invalid email pattern")
});

/// Extract email addresses, deduplicated case-insensitively in first-seen
/// order.
pub fn extract_emails(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut emails = Vec::new();
    for mat in EMAIL_REGEX.find_iter(text) {
        let email = mat.as_str();
        if seen.insert(email.to_lowercase()) {
            emails.push(email.to_string());
        }
    }
    emails
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_addresses() {
        let emails = extract_emails("Contact privacy@example.com or legal+tos@sub.example.org.");
        assert_eq!(emails, vec!["privacy@example.com", "legal+tos@sub.example.org"]);
    }

    #[test]
    fn dedup_is_case_insensitive() {
        let emails = extract_emails("Privacy@Example.com privacy@example.com");
        assert_eq!(emails, vec!["Privacy@Example.com"]);
    }

    #[test]
    fn no_match_on_plain_text() {
        assert!(extract_emails("no addresses here").is_empty());
    }
}
