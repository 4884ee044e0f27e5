//! Abbreviation exception list
//!
//! Tokens such as "Dr." end in sentence punctuation but do not close a
//! sentence. Matching is whole-token and case-sensitive.

use std::collections::{HashMap, HashSet};

/// Exact-match abbreviation table
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    /// Every abbreviation across all categories
    tokens: HashSet<String>,
    /// Abbreviation -> category it was declared under
    categories: HashMap<String, String>,
}

impl AbbreviationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from configuration categories
    pub fn from_categories(categories: HashMap<String, Vec<String>>) -> Self {
        let mut table = Self::new();
        for (category, abbreviations) in categories {
            for abbr in abbreviations {
                table.insert(&abbr, &category);
            }
        }
        table
    }

    /// Insert a single abbreviation
    pub fn insert(&mut self, abbreviation: &str, category: &str) {
        let abbreviation = abbreviation.trim();
        if abbreviation.is_empty() {
            return;
        }
        self.tokens.insert(abbreviation.to_string());
        self.categories
            .insert(abbreviation.to_string(), category.to_string());
    }

    /// Whole-token, case-sensitive lookup
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Category an abbreviation was declared under
    pub fn category(&self, token: &str) -> Option<&str> {
        self.categories.get(token).map(String::as_str)
    }

    /// Number of abbreviations
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> AbbreviationTable {
        let mut categories = HashMap::new();
        categories.insert(
            "titles".to_string(),
            vec!["Mr.".to_string(), "Dr.".to_string(), "Hon.".to_string()],
        );
        AbbreviationTable::from_categories(categories)
    }

    #[test]
    fn test_exact_match() {
        let table = titles();
        assert!(table.contains("Dr."));
        assert!(table.contains("Hon."));
        assert!(!table.contains("Ms."));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_case_sensitive() {
        let table = titles();
        assert!(!table.contains("dr."));
        assert!(!table.contains("DR."));
    }

    #[test]
    fn test_whole_token_only() {
        let table = titles();
        assert!(!table.contains("Dr"));
        assert!(!table.contains("(Dr."));
        assert!(!table.contains("Dr.,"));
    }

    #[test]
    fn test_category_lookup() {
        let table = titles();
        assert_eq!(table.category("Mr."), Some("titles"));
        assert_eq!(table.category("Jr."), None);
    }

    #[test]
    fn test_blank_entries_skipped() {
        let mut table = AbbreviationTable::new();
        table.insert("  ", "misc");
        assert!(table.is_empty());
    }
}
