//! Vocabulary count vectors and cosine similarity
//!
//! A vector has one dimension per vocabulary word. Vocabulary words are
//! stemmed with the same stemmer as the text, so `"engine"` counts every
//! `"engines"` in the input.

use std::collections::HashMap;
use std::sync::Arc;

use crate::count::TypeCounter;
use crate::language::Language;
use crate::{Error, Result};

/// Dense vector indexed by vocabulary position
pub type Vector = Vec<f64>;

/// How counts become vector components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VectorizationMethod {
    /// 1.0 when the word occurs at all, else 0.0
    #[default]
    OneHot,
    /// Number of occurrences
    Frequency,
}

/// Count vectorizer over a fixed vocabulary
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    vocabulary: Option<Arc<[String]>>,
    counter: TypeCounter,
    method: VectorizationMethod,
}

impl CountVectorizer {
    /// One-hot vectorizer with the default [`TypeCounter`] for `language`
    pub fn new(language: Language) -> Result<Self> {
        Ok(Self::with_type_counter(TypeCounter::new(language)?))
    }

    /// Vectorizer that tokenizes and stems through `counter`
    pub fn with_type_counter(counter: TypeCounter) -> Self {
        Self {
            vocabulary: None,
            counter,
            method: VectorizationMethod::default(),
        }
    }

    /// Set the vocabulary used by [`CountVectorizer::vectorize`]
    pub fn with_vocabulary<I, S>(mut self, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = Some(vocabulary.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_method(mut self, method: VectorizationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn vocabulary(&self) -> Option<&[String]> {
        self.vocabulary.as_deref()
    }

    pub fn method(&self) -> VectorizationMethod {
        self.method
    }

    pub fn type_counter(&self) -> &TypeCounter {
        &self.counter
    }

    /// Vectorize `text` with the configured vocabulary and method
    pub fn vectorize(&self, text: &str) -> Result<Vector> {
        let vocabulary = self.require_vocabulary()?;
        Ok(self.encode(&self.counter.type_count(text), vocabulary))
    }

    /// Occurrence count of each vocabulary word in `text`
    pub fn frequency(&self, text: &str, vocabulary: &[String]) -> Vector {
        self.frequency_of(&self.counter.type_count(text), vocabulary)
    }

    /// Presence of each vocabulary word in `text`
    pub fn one_hot(&self, text: &str, vocabulary: &[String]) -> Vector {
        to_one_hot(self.frequency(text, vocabulary))
    }

    /// Frequency vector from an existing stem count
    pub fn frequency_of(&self, types: &HashMap<String, usize>, vocabulary: &[String]) -> Vector {
        self.counter
            .stemmer()
            .stem_all(vocabulary)
            .iter()
            .map(|stem| types.get(stem).map_or(0.0, |&count| count as f64))
            .collect()
    }

    /// Vector from an existing stem count using the configured method
    pub fn encode(&self, types: &HashMap<String, usize>, vocabulary: &[String]) -> Vector {
        let frequency = self.frequency_of(types, vocabulary);
        match self.method {
            VectorizationMethod::OneHot => to_one_hot(frequency),
            VectorizationMethod::Frequency => frequency,
        }
    }

    /// Cosine of the vectors of `a` and `b`
    pub fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        cosine(&self.vectorize(a)?, &self.vectorize(b)?)
    }

    pub(crate) fn require_vocabulary(&self) -> Result<&[String]> {
        self.vocabulary().ok_or(Error::VocabularyNotSet)
    }
}

pub(crate) fn to_one_hot(mut vector: Vector) -> Vector {
    for value in vector.iter_mut().filter(|v| **v != 0.0) {
        *value = 1.0;
    }
    vector
}

/// Sum of pairwise products
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean length
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine of the angle between `a` and `b`, clamped to [-1, 1]
///
/// Undefined when either vector has zero magnitude.
pub fn cosine(a: &[f64], b: &[f64]) -> Result<f64> {
    let dot = dot_product(a, b)?;
    let lengths = magnitude(a) * magnitude(b);
    if lengths == 0.0 {
        return Err(Error::UndefinedValue(
            "cosine of a zero-magnitude vector".to_string(),
        ));
    }
    Ok((dot / lengths).clamp(-1.0, 1.0))
}
