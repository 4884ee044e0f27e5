//! Text facade
//!
//! [`Text`] owns a string and lazily computes, then caches, everything the
//! crate can derive from it.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::count::TypeCounter;
use crate::language::{Language, LanguageRules};
use crate::readability;
use crate::stem::{Porter2Stemmer, Stemmer};
use crate::tokenize::{
    RegexTokenizer, SentenceSegmenter, SyllableTokenizer, Tokenizer, WhitespaceTokenizer,
};
use crate::vectorize::{self, CountVectorizer, VectorizationMethod, Vector};
use crate::Result;

/// A string plus cached analyses
///
/// ```
/// use lexa_core::Text;
///
/// let text = Text::new("apple aardvarks zebra bananna aardvark").unwrap();
/// assert_eq!(text.word_count(), 5);
/// assert_eq!(text.type_count()["aardvark"], 2);
/// ```
pub struct Text {
    text: String,
    language: Language,
    tokenizer: Arc<dyn Tokenizer>,
    stemmer: Arc<dyn Stemmer>,
    type_counter: TypeCounter,
    vectorizer: CountVectorizer,
    whitespace: WhitespaceTokenizer,
    sentence_segmenter: SentenceSegmenter,
    syllable_tokenizer: SyllableTokenizer,

    tokens: OnceLock<Vec<String>>,
    stems: OnceLock<Vec<String>>,
    type_count: OnceLock<HashMap<String, usize>>,
    words: OnceLock<Vec<String>>,
    sentences: OnceLock<Vec<String>>,
    syllables: OnceLock<Vec<Vec<String>>>,
}

impl Text {
    /// English text with the default tokenizer and stemmer
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::builder().build(text)
    }

    pub fn builder() -> TextBuilder {
        TextBuilder::default()
    }

    /// Tokens from the configured tokenizer
    pub fn tokens(&self) -> &[String] {
        self.tokens.get_or_init(|| self.tokenizer.tokenize(&self.text))
    }

    /// Stems of [`Text::tokens`], one per token
    pub fn stems(&self) -> &[String] {
        self.stems
            .get_or_init(|| self.stemmer.stem_all(self.tokens()))
    }

    /// Count of each distinct stem
    pub fn type_count(&self) -> &HashMap<String, usize> {
        self.type_count
            .get_or_init(|| TypeCounter::count_types(self.stems()))
    }

    /// Whitespace separated words
    pub fn words(&self) -> &[String] {
        self.words
            .get_or_init(|| self.whitespace.tokenize(&self.text))
    }

    pub fn sentences(&self) -> &[String] {
        self.sentences
            .get_or_init(|| self.sentence_segmenter.sentences(&self.text))
    }

    /// Syllables of each word in [`Text::words`]
    pub fn syllables(&self) -> &[Vec<String>] {
        self.syllables.get_or_init(|| {
            self.words()
                .iter()
                .map(|word| self.syllable_tokenizer.syllables(word))
                .collect()
        })
    }

    pub fn word_count(&self) -> usize {
        self.words().len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences().len()
    }

    pub fn syllable_count(&self) -> usize {
        self.syllables().iter().map(Vec::len).sum()
    }

    /// Flesch reading ease; fails when there are no words or sentences
    pub fn flesch_kincaid_reading_ease(&self) -> Result<f64> {
        readability::flesch_kincaid_reading_ease(
            self.word_count(),
            self.sentence_count(),
            self.syllable_count(),
        )
    }

    /// Flesch-Kincaid grade level; fails when there are no words or sentences
    pub fn flesch_kincaid_grade_level(&self) -> Result<f64> {
        readability::flesch_kincaid_grade_level(
            self.word_count(),
            self.sentence_count(),
            self.syllable_count(),
        )
    }

    /// Vocabulary set with [`TextBuilder::vocabulary`]
    pub fn vocabulary(&self) -> Option<&[String]> {
        self.vectorizer.vocabulary()
    }

    /// Presence of each vocabulary word; needs a vocabulary
    pub fn vectorize_one_hot(&self) -> Result<Vector> {
        let vocabulary = self.vectorizer.require_vocabulary()?;
        let frequency = self.vectorizer.frequency_of(self.type_count(), vocabulary);
        Ok(vectorize::to_one_hot(frequency))
    }

    /// Occurrence count of each vocabulary word; needs a vocabulary
    pub fn vectorize_frequency(&self) -> Result<Vector> {
        let vocabulary = self.vectorizer.require_vocabulary()?;
        Ok(self.vectorizer.frequency_of(self.type_count(), vocabulary))
    }

    /// Cosine similarity with `other` over this text's vocabulary
    ///
    /// Both texts are vectorized with this text's stemmer and
    /// [`VectorizationMethod`] (one-hot unless the builder chose otherwise).
    pub fn cosine_similarity(&self, other: &Text) -> Result<f64> {
        let vocabulary = self.vectorizer.require_vocabulary()?;
        let mine = self.vectorizer.encode(self.type_count(), vocabulary);
        let theirs = self.vectorizer.vectorize(other.as_str())?;
        vectorize::cosine(&mine, &theirs)
    }

    /// Number of code points
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of UTF-8 bytes
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn type_counter(&self) -> &TypeCounter {
        &self.type_counter
    }

    pub fn sentence_segmenter(&self) -> &SentenceSegmenter {
        &self.sentence_segmenter
    }

    pub fn syllable_tokenizer(&self) -> &SyllableTokenizer {
        &self.syllable_tokenizer
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::fmt::Debug for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Text")
            .field("text", &self.text)
            .field("language", &self.language)
            .field("vocabulary", &self.vocabulary())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Text`]
#[derive(Default)]
pub struct TextBuilder {
    language: Language,
    rules: Option<Arc<LanguageRules>>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    stemmer: Option<Arc<dyn Stemmer>>,
    vocabulary: Option<Vec<String>>,
    vectorization_method: VectorizationMethod,
}

impl TextBuilder {
    /// Set the language
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Use externally loaded language rules for segmentation
    pub fn rules(mut self, rules: Arc<LanguageRules>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Tokenizer used for [`Text::tokens`]; defaults to the word regex
    pub fn tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Stemmer used for [`Text::stems`]; defaults to Porter2
    pub fn stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    /// Vocabulary for vectors and similarity
    pub fn vocabulary<I, S>(mut self, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = Some(vocabulary.into_iter().map(Into::into).collect());
        self
    }

    /// Encoding used by [`Text::cosine_similarity`]
    pub fn vectorization_method(mut self, method: VectorizationMethod) -> Self {
        self.vectorization_method = method;
        self
    }

    /// Build a [`Text`] around `text`
    pub fn build(self, text: impl Into<String>) -> Result<Text> {
        let language = self.language;
        let tokenizer: Arc<dyn Tokenizer> = match self.tokenizer {
            Some(tokenizer) => tokenizer,
            None => Arc::new(RegexTokenizer::english_words()?),
        };
        let stemmer: Arc<dyn Stemmer> = match self.stemmer {
            Some(stemmer) => stemmer,
            None => Arc::new(Porter2Stemmer::new(language)?),
        };
        let rules = match self.rules {
            Some(rules) => rules,
            None => language.rules()?,
        };

        let type_counter = TypeCounter::new(language)?
            .with_tokenizer(Arc::clone(&tokenizer))
            .with_stemmer(Arc::clone(&stemmer));
        let mut vectorizer = CountVectorizer::with_type_counter(type_counter.clone())
            .with_method(self.vectorization_method);
        if let Some(vocabulary) = self.vocabulary {
            vectorizer = vectorizer.with_vocabulary(vocabulary);
        }

        Ok(Text {
            text: text.into(),
            language,
            tokenizer,
            stemmer,
            type_counter,
            vectorizer,
            whitespace: WhitespaceTokenizer::new(),
            sentence_segmenter: SentenceSegmenter::with_rules(language, Arc::clone(&rules)),
            syllable_tokenizer: SyllableTokenizer::with_rules(language, rules),
            tokens: OnceLock::new(),
            stems: OnceLock::new(),
            type_count: OnceLock::new(),
            words: OnceLock::new(),
            sentences: OnceLock::new(),
            syllables: OnceLock::new(),
        })
    }
}
