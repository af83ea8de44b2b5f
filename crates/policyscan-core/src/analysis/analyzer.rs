//! The policy analyzer — single-pass, stateless pipeline over one document.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::classify::TechnologyClassifier;
use crate::config::ResolvedConfig;
use crate::detectors::{
    detect_api_references, detect_data_sharing, detect_third_party_services, CloudDetector,
};
use crate::errors::{AnalysisError, ConfigError};
use crate::extract::{extract_domains, extract_emails, extract_urls};

use super::types::Finding;

/// Sentinel used when no company name is supplied.
const UNKNOWN_COMPANY: &str = "Unknown";

/// Analyzes policy documents against a resolved configuration.
///
/// All matchers are compiled once at construction; `analyze` holds no
/// mutable state, so one analyzer can be shared by reference across threads
/// and reused for a whole batch.
pub struct PolicyAnalyzer {
    classifier: TechnologyClassifier,
    cloud: CloudDetector,
}

impl PolicyAnalyzer {
    /// Compile the classifier and cloud matchers from `config`.
    pub fn new(config: ResolvedConfig) -> Result<Self, ConfigError> {
        let classifier = TechnologyClassifier::new(&config)?;
        let cloud = CloudDetector::new(&config)?;
        Ok(Self { classifier, cloud })
    }

    /// Analyze one document and return the finding.
    ///
    /// Total over any string: empty input yields zero counts and empty
    /// collections. Two calls with the same text produce identical findings
    /// except for the timestamp.
    pub fn analyze(&self, text: &str, company_name: Option<&str>) -> Finding {
        let analysis_timestamp = unix_millis();
        let company_name = match company_name {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => UNKNOWN_COMPANY.to_string(),
        };
        tracing::debug!(company = %company_name, chars = text.len(), "analyzing document");

        let finding = Finding {
            company_name,
            analysis_timestamp,
            urls: extract_urls(text),
            domains: extract_domains(text),
            emails: extract_emails(text),
            technologies: self.classifier.classify(text),
            cloud_info: self.cloud.detect(text),
            api_references: detect_api_references(text),
            third_party_services: detect_third_party_services(text),
            data_sharing_mentions: detect_data_sharing(text),
            document_length: text.chars().count(),
            word_count: text.split_whitespace().count(),
        };
        tracing::debug!(
            urls = finding.urls.len(),
            categories = finding.technologies.len(),
            "analysis complete"
        );
        finding
    }

    /// Fail-fast entry point for untrusted byte input.
    ///
    /// Rejects non-UTF-8 input with [`AnalysisError::InvalidInput`] before
    /// any extraction runs; no partial finding is produced.
    pub fn analyze_bytes(
        &self,
        bytes: &[u8],
        company_name: Option<&str>,
    ) -> Result<Finding, AnalysisError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.analyze(text, company_name))
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
