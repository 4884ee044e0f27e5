//! Sonority hierarchy lookup
//!
//! Every configured letter is stored in both cases so lookups never need to
//! fold case on the hot path.

use std::collections::HashMap;

use crate::language::config::{LetterClass, SonorityClass};

/// Letter class and rank for one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SonorityEntry {
    pub class: LetterClass,
    pub rank: u8,
}

/// Character -> sonority entry table
#[derive(Debug, Clone)]
pub struct SonorityTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [Option<SonorityEntry>; 128],
    /// Non-ASCII letters (accented vowels and the like)
    non_ascii: HashMap<char, SonorityEntry>,
}

impl SonorityTable {
    /// Build from configured sonority classes
    pub fn new(classes: &[SonorityClass]) -> Self {
        let mut table = Self {
            ascii_table: [None; 128],
            non_ascii: HashMap::new(),
        };

        for class in classes {
            let entry = SonorityEntry {
                class: class.class,
                rank: class.rank,
            };
            for ch in class.chars.chars() {
                for cased in ch.to_lowercase().chain(ch.to_uppercase()) {
                    table.insert(cased, entry);
                }
            }
        }

        table
    }

    fn insert(&mut self, ch: char, entry: SonorityEntry) {
        if ch.is_ascii() {
            self.ascii_table[ch as usize] = Some(entry);
        } else {
            self.non_ascii.insert(ch, entry);
        }
    }

    /// Entry for a character, if it is a ranked letter
    #[inline]
    pub fn get(&self, ch: char) -> Option<SonorityEntry> {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.get(&ch).copied()
        }
    }

    /// Rank of a character; unranked characters rank 0
    #[inline]
    pub fn rank(&self, ch: char) -> u8 {
        self.get(ch).map_or(0, |entry| entry.rank)
    }
}
