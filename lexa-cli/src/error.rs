//! CLI-specific errors
//!
//! Core failures arrive as [`lexa_core::Error`] wrapped in `anyhow`; the
//! variants here cover what only the command line can get wrong.

use std::fmt;

/// Errors raised by argument resolution and configuration
#[derive(Debug)]
pub enum CliError {
    /// No file matched any input pattern
    NoInputFiles(Vec<String>),
    /// A glob pattern could not be parsed
    InvalidPattern(String),
    /// The CLI configuration file is unusable
    ConfigError(String),
    /// An output format name is not one of text, json or markdown
    UnknownFormat(String),
    /// A language configuration failed validation
    ValidationFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "No files found matching: {}", patterns.join(", "))
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnknownFormat(name) => write!(f, "Unknown output format: {name}"),
            CliError::ValidationFailed(msg) => write!(f, "Validation failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
