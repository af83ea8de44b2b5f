//! Domain name extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}\b").expect("Invalid domain pattern")
});

/// Extract bare host-like tokens (dot-separated labels ending in a 2+ letter
/// TLD shape). Hosts inside URLs and email domain parts match as well.
/// Deduplicated case-insensitively, keeping the first-seen form.
pub fn extract_domains(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut domains = Vec::new();
    for mat in DOMAIN_REGEX.find_iter(text) {
        let domain = mat.as_str();
        if seen.insert(domain.to_lowercase()) {
            domains.push(domain.to_string());
        }
    }
    domains
}
