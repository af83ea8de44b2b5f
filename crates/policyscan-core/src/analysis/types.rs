//! Finding types — the structured output of one document analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::detectors::CloudInfo;

/// Everything extracted from one document.
///
/// Created fresh per analysis call and owned outright by the caller; all
/// fields are JSON-native so the record serializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Caller-supplied company name, "Unknown" when absent.
    pub company_name: String,
    /// Unix timestamp in milliseconds, taken at analysis start.
    pub analysis_timestamp: u64,
    /// Unique URLs in first-occurrence order.
    pub urls: Vec<String>,
    /// Unique domains in first-occurrence order (case-insensitive dedup).
    pub domains: Vec<String>,
    /// Unique email addresses in first-occurrence order (case-insensitive
    /// dedup).
    pub emails: Vec<String>,
    /// Matched keywords per category, configured keyword order. Categories
    /// with no match are omitted.
    pub technologies: BTreeMap<String, Vec<String>>,
    /// Cloud provider services, programs, and certifications.
    pub cloud_info: CloudInfo,
    /// Context snippets around API-indicator terms. At most 10.
    pub api_references: Vec<String>,
    /// Recognized third-party service descriptions. At most 20.
    pub third_party_services: Vec<String>,
    /// Sentences containing data-sharing language. At most 15.
    pub data_sharing_mentions: Vec<String>,
    /// Raw character count, including whitespace.
    pub document_length: usize,
    /// Whitespace-delimited token count.
    pub word_count: usize,
}
