//! Sentence terminators and ellipsis patterns of a language profile
//!
//! Both are consulted once per token while splitting sentences.

/// Set of characters that can end a sentence
///
/// ASCII terminators live in a 128-bit mask. Anything else, such as `。`,
/// sits in a short sorted slice.
#[derive(Debug, Clone)]
pub struct TermTable {
    /// Bit `n` set when the code point `n` is a terminator
    ascii: u128,
    /// Sorted, deduplicated
    other: Box<[char]>,
}

impl TermTable {
    pub fn new(terminators: impl IntoIterator<Item = char>) -> Self {
        let mut ascii = 0u128;
        let mut other = Vec::new();

        for ch in terminators {
            if ch.is_ascii() {
                ascii |= 1 << (ch as u32);
            } else {
                other.push(ch);
            }
        }
        other.sort_unstable();
        other.dedup();

        Self {
            ascii,
            other: other.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii & (1 << (ch as u32)) != 0
        } else {
            self.other.binary_search(&ch).is_ok()
        }
    }

    /// Whether the last character of `word` ends a sentence
    #[inline]
    pub fn ends_with_terminator(&self, word: &str) -> bool {
        word.chars().next_back().is_some_and(|ch| self.is_terminator(ch))
    }
}

/// Ellipsis patterns and whether they close a sentence
#[derive(Debug, Clone)]
pub struct EllipsisSet {
    patterns: Vec<String>,
    treat_as_boundary: bool,
}

impl EllipsisSet {
    /// Create from configured patterns; longest patterns are tried first
    pub fn new(mut patterns: Vec<String>, treat_as_boundary: bool) -> Self {
        patterns.retain(|p| !p.is_empty());
        patterns.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
        Self {
            patterns,
            treat_as_boundary,
        }
    }

    /// Whether ellipses close sentences
    #[inline]
    pub fn treat_as_boundary(&self) -> bool {
        self.treat_as_boundary
    }

    /// Strip a trailing ellipsis, returning the part of the word before it
    pub fn strip_suffix<'a>(&self, word: &'a str) -> Option<&'a str> {
        self.patterns
            .iter()
            .find_map(|pattern| word.strip_suffix(pattern.as_str()))
    }
}
