//! Configuration resolution errors.

/// Errors that can occur while resolving a configuration.
///
/// All variants are raised at resolution/construction time, never during
/// document analysis.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An override value did not match its expected shape, e.g. a string
    /// where a sequence of strings is expected.
    #[error("Invalid configuration shape: {message}")]
    InvalidShape { message: String },

    /// A certification pattern supplied via configuration failed to compile.
    #[error("Invalid certification pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The keyword automaton could not be built from the resolved vocabulary.
    #[error("Keyword automaton construction failed: {message}")]
    Automaton { message: String },
}
