//! Rule-based English text normalization and segmentation
//!
//! This crate reduces words to stems, splits words into syllables and splits
//! text into sentences. Every algorithm is a deterministic transformation
//! driven by immutable tables that are built once per language and shared.
//!
//! # Components
//!
//! - [`Porter2Stemmer`]: Snowball English stemming as declarative rule steps
//! - [`SyllableTokenizer`]: syllables by the Sonority Sequencing Principle
//! - [`SentenceSegmenter`]: whitespace-driven sentence boundaries with
//!   abbreviation and initialism suppression
//! - [`Text`]: a cached facade that also provides type counts,
//!   Flesch-Kincaid scores, vocabulary vectors and cosine similarity
//!
//! # Example
//!
//! ```rust
//! use lexa_core::{Language, Porter2Stemmer, SentenceSegmenter, Stemmer, SyllableTokenizer};
//!
//! let stemmer = Porter2Stemmer::new(Language::English).unwrap();
//! assert_eq!(stemmer.stem("consolingly"), "consol");
//!
//! let syllables = SyllableTokenizer::new(Language::English).unwrap();
//! assert_eq!(syllables.syllables("justification"), ["jus", "ti", "fi", "ca", "tion"]);
//!
//! let sentences = SentenceSegmenter::new(Language::English).unwrap();
//! assert_eq!(
//!     sentences.sentences("Dr. Smith left. He returned."),
//!     ["Dr. Smith left.", "He returned."]
//! );
//! ```

pub mod classify;
pub mod count;
pub mod error;
pub mod language;
pub mod readability;
pub mod stem;
pub mod text;
pub mod tokenize;
pub mod vectorize;

pub use classify::{CharClass, CharClassifier};
pub use count::TypeCounter;
pub use error::{Error, Result};
pub use language::{Language, LanguageConfig, LanguageRules};
pub use stem::{NoOpStemmer, Porter2Stemmer, Stemmer};
pub use text::{Text, TextBuilder};
pub use tokenize::{
    RegexTokenizer, SentenceSegmenter, SyllableTokenizer, Tokenizer, WhitespaceTokenizer,
};
pub use vectorize::{CountVectorizer, VectorizationMethod, Vector};
