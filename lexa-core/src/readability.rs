//! Flesch-Kincaid readability scores

use crate::{Error, Result};

fn ratios(words: usize, sentences: usize, syllables: usize) -> Result<(f64, f64)> {
    if words == 0 {
        return Err(Error::UndefinedValue("word count is zero".to_string()));
    }
    if sentences == 0 {
        return Err(Error::UndefinedValue("sentence count is zero".to_string()));
    }
    Ok((
        words as f64 / sentences as f64,
        syllables as f64 / words as f64,
    ))
}

/// Flesch reading ease; higher is easier
pub fn flesch_kincaid_reading_ease(words: usize, sentences: usize, syllables: usize) -> Result<f64> {
    let (words_per_sentence, syllables_per_word) = ratios(words, sentences, syllables)?;
    Ok(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Flesch-Kincaid US grade level
pub fn flesch_kincaid_grade_level(words: usize, sentences: usize, syllables: usize) -> Result<f64> {
    let (words_per_sentence, syllables_per_word) = ratios(words, sentences, syllables)?;
    Ok(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_counts() {
        // 1362 words, 36 sentences, 2697 syllables
        let ease = flesch_kincaid_reading_ease(1362, 36, 2697).unwrap();
        let grade = flesch_kincaid_grade_level(1362, 36, 2697).unwrap();
        assert!((ease - 0.911_259).abs() < 1e-3, "ease = {ease}");
        assert!((grade - 22.531_079).abs() < 1e-3, "grade = {grade}");
    }

    #[test]
    fn test_zero_counts_are_undefined() {
        assert!(matches!(
            flesch_kincaid_reading_ease(0, 1, 1),
            Err(Error::UndefinedValue(_))
        ));
        assert!(matches!(
            flesch_kincaid_grade_level(1, 0, 1),
            Err(Error::UndefinedValue(_))
        ));
        assert!(flesch_kincaid_reading_ease(1, 1, 0).is_ok());
    }
}
