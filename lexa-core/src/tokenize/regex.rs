//! Regular expression word tokenizer

use regex::Regex;

use super::Tokenizer;
use crate::{Error, Result};

/// Letters, digits and underscores
pub const REGEX_ENGLISH_WORDS: &str = r"\b\w+\b";

/// ASCII letters only
pub const REGEX_ENGLISH_ALPHABET_ONLY: &str = r"\b[A-Za-z]+\b";

/// Returns every non-overlapping match of a pattern, compiled once
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    regex: Regex,
}

impl RegexTokenizer {
    /// Compile `pattern`
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Tokenizer for [`REGEX_ENGLISH_WORDS`]
    pub fn english_words() -> Result<Self> {
        Self::new(REGEX_ENGLISH_WORDS)
    }

    /// Tokenizer for [`REGEX_ENGLISH_ALPHABET_ONLY`]
    pub fn english_alphabet_only() -> Result<Self> {
        Self::new(REGEX_ENGLISH_ALPHABET_ONLY)
    }

    /// The source pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
