//! Whitespace word splitting

use super::Tokenizer;

/// Splits on runs of Unicode whitespace, dropping leading and trailing space
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Borrowing variant of [`Tokenizer::tokenize`]
    pub fn words<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split_whitespace()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.words(text).map(str::to_string).collect()
    }
}
