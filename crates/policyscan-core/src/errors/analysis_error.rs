//! Analysis errors.

/// Errors that can occur when starting a document analysis.
///
/// Extraction and detection are total over any valid text; the only failure
/// mode is input that is not text at all.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Input bytes are not valid UTF-8 text. Raised before any extraction
    /// runs; no partial finding is produced.
    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidInput(#[from] std::str::Utf8Error),
}
