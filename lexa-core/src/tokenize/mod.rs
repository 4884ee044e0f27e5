//! String to sequence tokenizers
//!
//! Every component that turns text into an ordered list of strings
//! implements [`Tokenizer`], so higher level code can depend on the
//! capability instead of a concrete algorithm.

pub mod regex;
pub mod sentence;
pub mod syllable;
pub mod whitespace;

pub use self::regex::{RegexTokenizer, REGEX_ENGLISH_ALPHABET_ONLY, REGEX_ENGLISH_WORDS};
pub use sentence::SentenceSegmenter;
pub use syllable::SyllableTokenizer;
pub use whitespace::WhitespaceTokenizer;

/// Text to ordered token sequence
pub trait Tokenizer: Send + Sync {
    /// Split `text`; never fails
    fn tokenize(&self, text: &str) -> Vec<String>;
}
