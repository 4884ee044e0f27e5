//! Declarative suffix rules
//!
//! A [`RuleStep`] is an ordered table of `(suffix, action, guard)` rules.
//! Applying a step selects the longest suffix present at the end of the word
//! and then evaluates that rule's guard. A failing guard ends the step;
//! shorter suffixes are not retried.

use super::regions::{ends_in_short_syllable, is_vowel, Regions};

/// Working buffer for one stemming run
#[derive(Debug, Clone)]
pub struct Word {
    pub chars: Vec<char>,
    pub regions: Regions,
}

impl Word {
    pub fn new(chars: Vec<char>) -> Self {
        let regions = Regions::locate(&chars);
        Self { chars, regions }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether the buffer ends with `suffix`
    pub fn ends_with(&self, suffix: &str) -> bool {
        let mut tail = self.chars.iter().rev();
        suffix.chars().rev().all(|s| tail.next() == Some(&s))
    }

    /// Whether the buffer currently spells `text`
    pub fn is(&self, text: &str) -> bool {
        self.chars.iter().copied().eq(text.chars())
    }

    fn replace_tail(&mut self, start: usize, replacement: &str) {
        self.chars.truncate(start);
        self.chars.extend(replacement.chars());
    }
}

/// Condition evaluated against the word and the start offset of the suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// Suffix lies inside R1
    InR1,
    /// Suffix lies inside R2
    InR2,
    /// Suffix is directly preceded by one of these characters
    After(&'static [char]),
    /// The part before the suffix contains a vowel
    VowelBefore,
    /// The part before the suffix, minus its last letter, contains a vowel
    VowelBeforePrevious,
    /// Preceded by a non-vowel that is not the first letter
    InnerNonVowelBefore,
    /// The part before the suffix does not end in a short syllable
    NotShortSyllableBefore,
    All(&'static [Guard]),
    Any(&'static [Guard]),
}

impl Guard {
    pub fn holds(&self, word: &Word, start: usize) -> bool {
        let before = &word.chars[..start];
        match self {
            Guard::Always => true,
            Guard::InR1 => start >= word.regions.r1,
            Guard::InR2 => start >= word.regions.r2,
            Guard::After(set) => before.last().is_some_and(|ch| set.contains(ch)),
            Guard::VowelBefore => before.iter().copied().any(is_vowel),
            Guard::VowelBeforePrevious => match before.split_last() {
                Some((_, rest)) => rest.iter().copied().any(is_vowel),
                None => false,
            },
            Guard::InnerNonVowelBefore => start >= 2 && !is_vowel(before[start - 1]),
            Guard::NotShortSyllableBefore => !ends_in_short_syllable(before),
            Guard::All(guards) => guards.iter().all(|g| g.holds(word, start)),
            Guard::Any(guards) => guards.iter().any(|g| g.holds(word, start)),
        }
    }
}

/// What a matching rule does to the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Match and leave the word alone
    Keep,
    Delete,
    Replace(&'static str),
    /// `long` after two or more letters, `short` otherwise
    ReplaceByLength {
        long: &'static str,
        short: &'static str,
    },
    /// Keep the suffix and append text after it
    Append(&'static str),
    /// Drop the last letter of a doubled pair
    Undouble,
    /// Delete, then let the caller repair the remaining stem
    DeleteAndRepair,
}

/// One `(suffix, action, guard)` row
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub suffix: &'static str,
    pub action: Action,
    pub guard: Guard,
}

impl Rule {
    pub const fn new(suffix: &'static str, action: Action) -> Self {
        Self {
            suffix,
            action,
            guard: Guard::Always,
        }
    }

    pub const fn when(suffix: &'static str, action: Action, guard: Guard) -> Self {
        Self {
            suffix,
            action,
            guard,
        }
    }
}

/// Result of applying a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No listed suffix is present
    NoMatch,
    /// The longest suffix matched but its guard failed
    Blocked,
    /// The rule fired
    Applied(Action),
}

/// Named, ordered rule table with a guard shared by every rule
#[derive(Debug)]
pub struct RuleStep {
    pub name: &'static str,
    pub region: Guard,
    pub rules: &'static [Rule],
}

impl RuleStep {
    /// Longest rule whose suffix ends the word
    pub fn longest_match(&self, word: &Word) -> Option<&'static Rule> {
        self.rules
            .iter()
            .filter(|rule| word.ends_with(rule.suffix))
            .max_by_key(|rule| rule.suffix.chars().count())
    }

    pub fn apply(&self, word: &mut Word) -> Outcome {
        let Some(rule) = self.longest_match(word) else {
            return Outcome::NoMatch;
        };
        let start = word.len() - rule.suffix.chars().count();

        if !(self.region.holds(word, start) && rule.guard.holds(word, start)) {
            tracing::trace!(step = self.name, suffix = rule.suffix, "guard failed");
            return Outcome::Blocked;
        }

        match rule.action {
            Action::Keep => {}
            Action::Delete | Action::DeleteAndRepair => word.chars.truncate(start),
            Action::Replace(replacement) => word.replace_tail(start, replacement),
            Action::ReplaceByLength { long, short } => {
                word.replace_tail(start, if start > 1 { long } else { short })
            }
            Action::Append(text) => word.chars.extend(text.chars()),
            Action::Undouble => {
                word.chars.pop();
            }
        }
        tracing::trace!(step = self.name, suffix = rule.suffix, "rule applied");
        Outcome::Applied(rule.action)
    }
}
