//! R1/R2 regions and short syllable detection
//!
//! All offsets are code point indices into the working buffer. A marked
//! consonantal `y` is stored as `Y` and is therefore not a vowel here.

/// Vowels recognised by the English stemmer
#[inline]
pub fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Prefixes after which R1 starts regardless of the vowel scan
const R1_PREFIXES: &[&str] = &["gener", "commun", "arsen"];

/// Start offsets of the R1 and R2 regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
}

impl Regions {
    /// Locate both regions for a word
    pub fn locate(chars: &[char]) -> Self {
        let r1 = R1_PREFIXES
            .iter()
            .find(|prefix| starts_with(chars, prefix))
            .map(|prefix| prefix.chars().count())
            .unwrap_or_else(|| region_after(chars, 0));
        let r2 = region_after(chars, r1);
        Self { r1, r2 }
    }
}

/// Offset just past the first non-vowel that follows a vowel, scanning from
/// `start`; the word length when there is none
fn region_after(chars: &[char], start: usize) -> usize {
    (start..chars.len().saturating_sub(1))
        .find(|&i| is_vowel(chars[i]) && !is_vowel(chars[i + 1]))
        .map_or(chars.len(), |i| i + 2)
}

fn starts_with(chars: &[char], prefix: &str) -> bool {
    let mut it = chars.iter();
    prefix.chars().all(|p| it.next() == Some(&p))
}

/// Whether `chars` ends in a short syllable
///
/// Either non-vowel, vowel, non-vowel other than `w`, `x` or `Y`; or the
/// whole buffer is a vowel followed by a non-vowel.
pub fn ends_in_short_syllable(chars: &[char]) -> bool {
    match chars {
        [a, b] => is_vowel(*a) && !is_vowel(*b),
        [.., a, b, c] => {
            !is_vowel(*a) && is_vowel(*b) && !is_vowel(*c) && !matches!(c, 'w' | 'x' | 'Y')
        }
        _ => false,
    }
}

/// A word is short when R1 is empty and it ends in a short syllable
pub fn is_short_word(chars: &[char], r1: usize) -> bool {
    r1 >= chars.len() && ends_in_short_syllable(chars)
}
