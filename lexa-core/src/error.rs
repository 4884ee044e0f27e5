//! Error types for lexa-core
//!
//! Only construction can fail. Stemming, syllable segmentation and sentence
//! segmentation encode "nothing matched" in their return values.

use thiserror::Error;

/// Errors raised while building components or loading language rules
#[derive(Debug, Error)]
pub enum Error {
    /// The requested language has no rule set
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that was requested
        code: String,
    },

    /// A language configuration was parsed but is not usable
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A language configuration could not be parsed
    #[error("configuration error in {path}: {error}")]
    ConfigParse {
        /// Where the configuration came from (file path or embedded name)
        path: String,
        /// The parser message
        error: String,
    },

    /// A regular expression failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern
        pattern: String,
        /// The regex compiler error
        #[source]
        source: regex::Error,
    },

    /// A closed-form score has no defined value for the given counts
    #[error("undefined value: {0}")]
    UndefinedValue(String),

    /// Two vectors that must share a vocabulary have different dimensions
    #[error("vector dimensions differ: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the first vector
        left: usize,
        /// Length of the second vector
        right: usize,
    },

    /// A vocabulary-based operation ran without a vocabulary
    #[error("vocabulary not set")]
    VocabularyNotSet,

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for lexa-core operations
pub type Result<T> = std::result::Result<T, Error>;
