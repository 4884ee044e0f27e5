//! Porter2 (Snowball English) stemmer
//!
//! The run is: irregular forms, apostrophes and consonantal `y`, regions,
//! then steps 1a through 5 as declarative [`RuleStep`] tables.

use std::borrow::Cow;

use super::regions::{is_short_word, is_vowel};
use super::rules::{Action, Guard, Outcome, Rule, RuleStep, Word};
use super::Stemmer;
use crate::language::Language;
use crate::Result;

use Action::*;

/// Letters that may precede a deletable `li`
const VALID_LI: &[char] = &['c', 'd', 'e', 'g', 'h', 'k', 'm', 'n', 'r', 't'];

static APOSTROPHE: RuleStep = RuleStep {
    name: "apostrophe",
    region: Guard::Always,
    rules: &[
        Rule::new("'s'", Delete),
        Rule::new("'s", Delete),
        Rule::new("'", Delete),
    ],
};

static STEP_1A: RuleStep = RuleStep {
    name: "1a",
    region: Guard::Always,
    rules: &[
        Rule::new("sses", Replace("ss")),
        Rule::new(
            "ied",
            ReplaceByLength {
                long: "i",
                short: "ie",
            },
        ),
        Rule::new(
            "ies",
            ReplaceByLength {
                long: "i",
                short: "ie",
            },
        ),
        Rule::new("us", Keep),
        Rule::new("ss", Keep),
        Rule::when("s", Delete, Guard::VowelBeforePrevious),
    ],
};

static STEP_1B: RuleStep = RuleStep {
    name: "1b",
    region: Guard::Always,
    rules: &[
        Rule::when("eed", Replace("ee"), Guard::InR1),
        Rule::when("eedly", Replace("ee"), Guard::InR1),
        Rule::when("ed", DeleteAndRepair, Guard::VowelBefore),
        Rule::when("edly", DeleteAndRepair, Guard::VowelBefore),
        Rule::when("ing", DeleteAndRepair, Guard::VowelBefore),
        Rule::when("ingly", DeleteAndRepair, Guard::VowelBefore),
    ],
};

/// Tidies the stem left behind by an `ed`/`ing` deletion
static STEP_1B_REPAIR: RuleStep = RuleStep {
    name: "1b-repair",
    region: Guard::Always,
    rules: &[
        Rule::new("at", Append("e")),
        Rule::new("bl", Append("e")),
        Rule::new("iz", Append("e")),
        Rule::new("bb", Undouble),
        Rule::new("dd", Undouble),
        Rule::new("ff", Undouble),
        Rule::new("gg", Undouble),
        Rule::new("mm", Undouble),
        Rule::new("nn", Undouble),
        Rule::new("pp", Undouble),
        Rule::new("rr", Undouble),
        Rule::new("tt", Undouble),
    ],
};

/// A marked `Y` always follows a vowel or starts the word, so only `y` can
/// qualify here
static STEP_1C: RuleStep = RuleStep {
    name: "1c",
    region: Guard::Always,
    rules: &[Rule::when("y", Replace("i"), Guard::InnerNonVowelBefore)],
};

static STEP_2: RuleStep = RuleStep {
    name: "2",
    region: Guard::InR1,
    rules: &[
        Rule::new("tional", Replace("tion")),
        Rule::new("enci", Replace("ence")),
        Rule::new("anci", Replace("ance")),
        Rule::new("abli", Replace("able")),
        Rule::new("entli", Replace("ent")),
        Rule::new("izer", Replace("ize")),
        Rule::new("ization", Replace("ize")),
        Rule::new("ational", Replace("ate")),
        Rule::new("ation", Replace("ate")),
        Rule::new("ator", Replace("ate")),
        Rule::new("alism", Replace("al")),
        Rule::new("aliti", Replace("al")),
        Rule::new("alli", Replace("al")),
        Rule::new("fulness", Replace("ful")),
        Rule::new("ousli", Replace("ous")),
        Rule::new("ousness", Replace("ous")),
        Rule::new("iveness", Replace("ive")),
        Rule::new("iviti", Replace("ive")),
        Rule::new("biliti", Replace("ble")),
        Rule::new("bli", Replace("ble")),
        Rule::when("ogi", Replace("og"), Guard::After(&['l'])),
        Rule::new("fulli", Replace("ful")),
        Rule::new("lessli", Replace("less")),
        Rule::when("li", Delete, Guard::After(VALID_LI)),
    ],
};

static STEP_3: RuleStep = RuleStep {
    name: "3",
    region: Guard::InR1,
    rules: &[
        Rule::new("tional", Replace("tion")),
        Rule::new("ational", Replace("ate")),
        Rule::new("alize", Replace("al")),
        Rule::new("icate", Replace("ic")),
        Rule::new("iciti", Replace("ic")),
        Rule::new("ical", Replace("ic")),
        Rule::new("ful", Delete),
        Rule::new("ness", Delete),
        Rule::when("ative", Delete, Guard::InR2),
    ],
};

static STEP_4: RuleStep = RuleStep {
    name: "4",
    region: Guard::InR2,
    rules: &[
        Rule::new("al", Delete),
        Rule::new("ance", Delete),
        Rule::new("ence", Delete),
        Rule::new("er", Delete),
        Rule::new("ic", Delete),
        Rule::new("able", Delete),
        Rule::new("ible", Delete),
        Rule::new("ant", Delete),
        Rule::new("ement", Delete),
        Rule::new("ment", Delete),
        Rule::new("ent", Delete),
        Rule::new("ism", Delete),
        Rule::new("ate", Delete),
        Rule::new("iti", Delete),
        Rule::new("ous", Delete),
        Rule::new("ive", Delete),
        Rule::new("ize", Delete),
        Rule::when("ion", Delete, Guard::After(&['s', 't'])),
    ],
};

static STEP_5: RuleStep = RuleStep {
    name: "5",
    region: Guard::Always,
    rules: &[
        Rule::when(
            "e",
            Delete,
            Guard::Any(&[
                Guard::InR2,
                Guard::All(&[Guard::InR1, Guard::NotShortSyllableBefore]),
            ]),
        ),
        Rule::when("l", Delete, Guard::All(&[Guard::InR2, Guard::After(&['l'])])),
    ],
};

/// Whole-word forms that bypass the algorithm
/// English steps in run order
static ENGLISH_STEPS: [&RuleStep; 9] = [
    &APOSTROPHE,
    &STEP_1A,
    &STEP_1B,
    &STEP_1B_REPAIR,
    &STEP_1C,
    &STEP_2,
    &STEP_3,
    &STEP_4,
    &STEP_5,
];

fn irregular_stem(word: &str) -> Option<&'static str> {
    let stem = match word {
        "skis" => "ski",
        "skies" => "sky",
        "dying" => "die",
        "lying" => "lie",
        "tying" => "tie",
        "idly" => "idl",
        "gently" => "gentl",
        "ugly" => "ugli",
        "early" => "earli",
        "only" => "onli",
        "singly" => "singl",
        "sky" => "sky",
        "news" => "news",
        "howe" => "howe",
        "atlas" => "atlas",
        "cosmos" => "cosmos",
        "bias" => "bias",
        "andes" => "andes",
        _ => return None,
    };
    Some(stem)
}

/// Words left alone once their plural has been removed
const INVARIANT_AFTER_1A: &[&str] = &[
    "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
];

/// Map typographic apostrophes to `'`
fn normalize_apostrophes(word: &str) -> Cow<'_, str> {
    const APOSTROPHES: [char; 3] = ['\u{2019}', '\u{2018}', '\u{201B}'];
    if word.contains(APOSTROPHES) {
        Cow::Owned(word.replace(APOSTROPHES, "'"))
    } else {
        Cow::Borrowed(word)
    }
}

/// Porter2 stemmer for English
#[derive(Debug, Clone, Copy)]
pub struct Porter2Stemmer {
    language: Language,
}

impl Porter2Stemmer {
    /// Create a stemmer for `language`
    pub fn new(language: Language) -> Result<Self> {
        match language {
            Language::English => Ok(Self { language }),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Rule tables in the order a run consults them
    ///
    /// `1b-repair` only runs after a `1b` deletion.
    pub fn steps(&self) -> &'static [&'static RuleStep] {
        match self.language {
            Language::English => &ENGLISH_STEPS,
        }
    }

    /// A single step by name, e.g. `"1a"` or `"4"`
    pub fn step(&self, name: &str) -> Option<&'static RuleStep> {
        self.steps().iter().copied().find(|step| step.name == name)
    }

    /// Whole-word exception consulted before any step
    pub fn irregular_form(&self, word: &str) -> Option<&'static str> {
        match self.language {
            Language::English => irregular_stem(word),
        }
    }

    fn stem_english(&self, word: &str) -> String {
        let normalized = normalize_apostrophes(word);
        if let Some(stem) = irregular_stem(&normalized) {
            return stem.to_string();
        }

        let mut chars: Vec<char> = normalized.chars().collect();
        if chars.len() < 3 {
            return word.to_string();
        }

        if chars[0] == '\'' {
            chars.remove(0);
        }

        // Consonantal y becomes Y; remember where so an input Y survives
        let mut marked = Vec::new();
        for i in 0..chars.len() {
            if chars[i] == 'y' && (i == 0 || is_vowel(chars[i - 1])) {
                chars[i] = 'Y';
                marked.push(i);
            }
        }

        let mut word = Word::new(chars);
        APOSTROPHE.apply(&mut word);
        STEP_1A.apply(&mut word);

        if !INVARIANT_AFTER_1A.iter().any(|w| word.is(w)) {
            if let Outcome::Applied(DeleteAndRepair) = STEP_1B.apply(&mut word) {
                if STEP_1B_REPAIR.apply(&mut word) == Outcome::NoMatch
                    && is_short_word(&word.chars, word.regions.r1)
                {
                    word.chars.push('e');
                }
            }
            for step in [&STEP_1C, &STEP_2, &STEP_3, &STEP_4, &STEP_5] {
                step.apply(&mut word);
            }
        }

        for i in marked {
            if word.chars.get(i) == Some(&'Y') {
                word.chars[i] = 'y';
            }
        }
        word.chars.into_iter().collect()
    }
}

impl Stemmer for Porter2Stemmer {
    fn stem(&self, word: &str) -> String {
        match self.language {
            Language::English => self.stem_english(word),
        }
    }
}
