//! Character classes supplied by the grammar.
//!
//! Four membership sets drive the context rules: vowels, consonants, digits
//! and case-sensitive characters. Punctuation is not stored; it is the
//! derived "everything else" class.

use std::collections::HashSet;

/// The vowel alphabet used by `vowel` scope checks.
///
/// Deliberately a fixed builtin rather than the grammar's own `vowel` field:
/// the grammar field describes the source alphabet for authoring purposes,
/// while rule evaluation only ever distinguishes the five romanized vowels.
/// `consonant` scope checks DO use the grammar's consonant set. This
/// asymmetry comes from the reference implementation and is intentional.
const BUILTIN_VOWELS: &str = "aeiou";

/// The grammar's character membership sets.
///
/// Membership tests are case-insensitive except for
/// [`is_case_sensitive`](Self::is_case_sensitive), which consults the set
/// against both the original and the lowercased character.
#[derive(Debug, Clone)]
pub struct CharClasses {
    vowels: HashSet<char>,
    consonants: HashSet<char>,
    digits: HashSet<char>,
    case_sensitive: HashSet<char>,
}

impl CharClasses {
    /// Build the classes from the grammar's four set strings.
    #[must_use]
    pub fn new(vowel: &str, consonant: &str, number: &str, casesensitive: &str) -> Self {
        Self {
            vowels: vowel.chars().collect(),
            consonants: consonant.chars().collect(),
            digits: number.chars().collect(),
            case_sensitive: casesensitive.chars().collect(),
        }
    }

    /// Is `c` a vowel? Tests the lowercased character against the builtin
    /// `aeiou` alphabet (see [`BUILTIN_VOWELS`] for why not the grammar set).
    #[must_use]
    pub fn is_vowel(&self, c: char) -> bool {
        BUILTIN_VOWELS.contains(lowercase(c))
    }

    /// Is `c` a consonant? Case-insensitive membership in the grammar's
    /// consonant set.
    #[must_use]
    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(&lowercase(c))
    }

    /// Is `c` a digit per the grammar's number set? Exact membership, no
    /// case folding.
    #[must_use]
    pub fn is_digit(&self, c: char) -> bool {
        self.digits.contains(&c)
    }

    /// Is `c` punctuation? The derived catch-all class: neither vowel nor
    /// consonant nor digit.
    #[must_use]
    pub fn is_punctuation(&self, c: char) -> bool {
        !self.is_vowel(c) && !self.is_consonant(c) && !self.is_digit(c)
    }

    /// Is `c` exempt from forced lowercasing? True when `c` itself or its
    /// lowercase form appears in the grammar's case-sensitive set.
    #[must_use]
    pub fn is_case_sensitive(&self, c: char) -> bool {
        self.case_sensitive.contains(&c) || self.case_sensitive.contains(&lowercase(c))
    }

    /// The grammar's own vowel set (authoring metadata; not consulted by
    /// `vowel` scope checks).
    #[must_use]
    pub fn grammar_vowels(&self) -> &HashSet<char> {
        &self.vowels
    }

    /// The grammar's consonant set.
    #[must_use]
    pub fn consonants(&self) -> &HashSet<char> {
        &self.consonants
    }

    /// The grammar's digit set.
    #[must_use]
    pub fn digits(&self) -> &HashSet<char> {
        &self.digits
    }

    /// The grammar's case-sensitive set.
    #[must_use]
    pub fn case_sensitive(&self) -> &HashSet<char> {
        &self.case_sensitive
    }
}

/// Lowercase a single character, keeping it a single unit.
///
/// Multi-char lowercase expansions collapse to their first character; the
/// engine operates on one text unit per input character.
pub(crate) fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
