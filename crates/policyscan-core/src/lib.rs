//! policyscan-core: extraction and classification engine for policy documents
//!
//! This crate provides the components for PolicyScan:
//! - Config: default keyword taxonomy merged with caller overrides
//! - Extract: URL, domain, and email pattern extraction
//! - Classify: technology keyword detection by category
//! - Detectors: cloud provider, API reference, third-party service,
//!   and data-sharing detection
//! - Analysis: per-document aggregation into a finding record
//! - Report: text and JSON formatting of findings
//!
//! The engine is synchronous and stateless across calls: a
//! [`PolicyAnalyzer`] compiled from one [`ResolvedConfig`] can be shared by
//! reference across threads and reused for a whole batch of documents.

pub mod analysis;
pub mod classify;
pub mod config;
pub mod detectors;
pub mod errors;
pub mod extract;
pub mod report;

// Re-exports for convenience
pub use analysis::{Finding, PolicyAnalyzer};
pub use classify::TechnologyClassifier;
pub use config::{resolve, ConfigDefaults, ConfigOverrides, ResolvedConfig};
pub use detectors::{
    CloudDetector, CloudInfo, MAX_API_REFERENCES, MAX_DATA_SHARING_MENTIONS,
    MAX_THIRD_PARTY_SERVICES,
};
pub use errors::{AnalysisError, ConfigError};
pub use extract::{extract_domains, extract_emails, extract_urls};
pub use report::{json_report, text_report, ReportSections};
