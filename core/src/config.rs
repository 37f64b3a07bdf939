//! Serde config types for the external grammar schema.
//!
//! These mirror the JSON grammar file one-to-one and compile eagerly into
//! the runtime types in [`pattern`](crate::pattern). Shape problems surface
//! at load time as [`GrammarError`], never during `parse`.
//!
//! # Schema
//!
//! ```json
//! {
//!   "vowel": "aeiou",
//!   "consonant": "bcdfghjklmnpqrstvwxyz",
//!   "number": "0123456789",
//!   "casesensitive": "oiudgjnrstyz",
//!   "patterns": [
//!     { "find": "rri", "replace": "ৃ",
//!       "rules": [
//!         { "matches": [ { "type": "prefix", "scope": "!consonant" } ],
//!           "replace": "ঋ" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::pattern::{ContextMatch, MatchKind, Pattern, Rule, Scope};
use crate::GrammarError;
use serde::Deserialize;

/// The root grammar document.
#[derive(Debug, Clone, Deserialize)]
pub struct GrammarConfig {
    /// Source-alphabet vowels (authoring metadata; scope checks use the
    /// builtin vowel alphabet).
    pub vowel: String,
    /// Source-alphabet consonants, consulted by `consonant` scope checks.
    pub consonant: String,
    /// Digit characters; anything outside vowel/consonant/number counts as
    /// punctuation.
    pub number: String,
    /// Characters exempt from forced lowercasing.
    pub casesensitive: String,
    /// The find/replace patterns, in authoring order.
    pub patterns: Vec<PatternConfig>,
}

/// One find/replace pattern. `rules` omitted or empty means unconditional.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
    /// The source string to find.
    pub find: String,
    /// The default replacement.
    pub replace: String,
    /// Optional context rules.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A guarded alternative replacement.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    /// Conditions that must all hold for this rule to fire.
    pub matches: Vec<MatchConfig>,
    /// The replacement emitted when the rule fires.
    pub replace: String,
}

/// One context condition.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchConfig {
    /// `"prefix"` or `"suffix"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `"punctuation"`, `"vowel"`, `"consonant"` or `"exact"`, optionally
    /// prefixed with `"!"` to negate.
    pub scope: String,
    /// The literal for `"exact"` scope; ignored otherwise.
    #[serde(default)]
    pub value: Option<String>,
}

impl MatchConfig {
    /// Compile into a runtime [`ContextMatch`].
    ///
    /// # Errors
    ///
    /// [`GrammarError::UnknownMatchType`] or [`GrammarError::UnknownScope`]
    /// when the discriminant strings are unrecognized.
    pub fn compile(&self) -> Result<ContextMatch, GrammarError> {
        let kind = match self.kind.as_str() {
            "prefix" => MatchKind::Prefix,
            "suffix" => MatchKind::Suffix,
            other => {
                return Err(GrammarError::UnknownMatchType {
                    value: other.to_string(),
                })
            }
        };

        let (token, negated) = match self.scope.strip_prefix('!') {
            Some(stripped) => (stripped, true),
            None => (self.scope.as_str(), false),
        };

        let scope = match token {
            "punctuation" => Scope::Punctuation,
            "vowel" => Scope::Vowel,
            "consonant" => Scope::Consonant,
            "exact" => Scope::Exact,
            other => {
                return Err(GrammarError::UnknownScope {
                    scope: other.to_string(),
                })
            }
        };

        Ok(ContextMatch {
            kind,
            scope,
            negated,
            value: self.value.clone().unwrap_or_default(),
        })
    }
}

impl RuleConfig {
    /// Compile into a runtime [`Rule`].
    ///
    /// # Errors
    ///
    /// Propagates the first failing [`MatchConfig::compile`].
    pub fn compile(&self) -> Result<Rule, GrammarError> {
        let matches = self
            .matches
            .iter()
            .map(MatchConfig::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Rule {
            matches,
            replace: self.replace.clone(),
        })
    }
}

impl PatternConfig {
    /// Compile into a runtime [`Pattern`]. `index` is the pattern's position
    /// in the grammar, used only for error reporting.
    ///
    /// # Errors
    ///
    /// [`GrammarError::EmptyFind`] for an empty `find` string, or any rule
    /// compilation error.
    pub fn compile(&self, index: usize) -> Result<Pattern, GrammarError> {
        if self.find.is_empty() {
            return Err(GrammarError::EmptyFind { index });
        }
        let rules = self
            .rules
            .iter()
            .map(RuleConfig::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Pattern::new(self.find.clone(), self.replace.clone(), rules))
    }
}
