//! Analysis aggregator — orchestrates extractors, classifier, and detectors
//! over one document and assembles the finding record.

mod analyzer;
mod types;

pub use analyzer::PolicyAnalyzer;
pub use types::Finding;
