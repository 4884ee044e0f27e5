//! Character classification
//!
//! Maps a single code point to a phonetic or typographic category and to a
//! sonority rank. Letter categories come from the language's sonority table;
//! punctuation, digits and whitespace come from Unicode properties.

use regex::Regex;

use crate::language::config::{LetterClass, Syllables};
use crate::language::tables::SonorityTable;
use crate::{Error, Result};

/// Unicode general category P* (Pc, Pd, Ps, Pe, Pi, Pf, Po)
const PUNCTUATION_PATTERN: &str = r"^\p{P}$";

/// Category of a single code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Syllable nucleus
    Vowel,
    /// Nasals and liquids
    Nasal,
    /// Fricatives
    Fricative,
    /// Stops and everything else ranked lowest
    Stop,
    /// Unicode punctuation
    Punctuation,
    /// Unicode number
    Digit,
    /// Unicode whitespace
    Space,
    /// Anything else (symbols, unranked letters)
    Other,
}

impl CharClass {
    /// Punctuation, digits and whitespace force syllable boundaries
    #[inline]
    pub fn is_separator(self) -> bool {
        matches!(self, CharClass::Punctuation | CharClass::Digit | CharClass::Space)
    }
}

impl From<LetterClass> for CharClass {
    fn from(class: LetterClass) -> Self {
        match class {
            LetterClass::Vowel => CharClass::Vowel,
            LetterClass::Nasal => CharClass::Nasal,
            LetterClass::Fricative => CharClass::Fricative,
            LetterClass::Stop => CharClass::Stop,
        }
    }
}

/// Stateless character classifier built once per language
#[derive(Debug, Clone)]
pub struct CharClassifier {
    sonority: SonorityTable,
    /// Vowels in both cases, used for syllable validation
    vowels: Vec<char>,
    /// ASCII punctuation lookup
    ascii_punct: [bool; 128],
    /// Slow path for non-ASCII punctuation
    punct: Regex,
}

impl CharClassifier {
    /// Build a classifier from the syllable section of a language config
    pub fn new(syllables: &Syllables) -> Result<Self> {
        let punct = Regex::new(PUNCTUATION_PATTERN).map_err(|source| Error::InvalidPattern {
            pattern: PUNCTUATION_PATTERN.to_string(),
            source,
        })?;

        let mut ascii_punct = [false; 128];
        let mut buf = [0u8; 4];
        for byte in 0u8..128 {
            let ch = char::from(byte);
            ascii_punct[byte as usize] = punct.is_match(ch.encode_utf8(&mut buf));
        }

        let mut vowels: Vec<char> = syllables
            .vowels
            .chars()
            .flat_map(|v| v.to_lowercase().chain(v.to_uppercase()))
            .collect();
        vowels.sort_unstable();
        vowels.dedup();

        Ok(Self {
            sonority: SonorityTable::new(&syllables.sonority),
            vowels,
            ascii_punct,
            punct,
        })
    }

    /// Classify a code point
    pub fn classify(&self, ch: char) -> CharClass {
        if let Some(entry) = self.sonority.get(ch) {
            return entry.class.into();
        }
        if ch.is_whitespace() {
            CharClass::Space
        } else if ch.is_numeric() {
            CharClass::Digit
        } else if self.is_punctuation(ch) {
            CharClass::Punctuation
        } else {
            CharClass::Other
        }
    }

    /// Sonority rank; characters outside the hierarchy rank 0
    #[inline]
    pub fn rank(&self, ch: char) -> u8 {
        self.sonority.rank(ch)
    }

    /// Case-insensitive vowel test
    #[inline]
    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.binary_search(&ch).is_ok()
    }

    /// Whether any character of `text` is a vowel
    pub fn has_vowel(&self, text: &str) -> bool {
        text.chars().any(|ch| self.is_vowel(ch))
    }

    /// Unicode punctuation test
    #[inline]
    pub fn is_punctuation(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_punct[ch as usize]
        } else {
            let mut buf = [0u8; 4];
            self.punct.is_match(ch.encode_utf8(&mut buf))
        }
    }

    /// Punctuation, digit or whitespace
    #[inline]
    pub fn is_separator(&self, ch: char) -> bool {
        ch.is_whitespace() || ch.is_numeric() || self.is_punctuation(ch)
    }

    /// Read-only access to the sonority table
    pub fn sonority(&self) -> &SonorityTable {
        &self.sonority
    }
}
