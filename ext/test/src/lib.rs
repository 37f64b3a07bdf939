//! okkhor-test: Grammar builders for conformance testing
//!
//! Provides a programmatic grammar builder so tests can construct small,
//! targeted grammars without inline JSON, plus a YAML fixture runner
//! behind the `fixtures` feature.
//!
//! # Example
//!
//! ```
//! use okkhor_test::prelude::*;
//!
//! let engine = TestGrammar::latin()
//!     .pattern("k", "K")
//!     .pattern("kh", "KH")
//!     .engine()
//!     .unwrap();
//!
//! assert_eq!(engine.parse("kha"), "KHa");
//! ```

use okkhor::prelude::*;

#[cfg(feature = "fixtures")]
pub mod fixture;

/// Builds a [`GrammarConfig`] piece by piece.
///
/// Used for conformance testing where a case needs a minimal grammar with
/// exactly the patterns under test and nothing else.
#[derive(Debug, Clone, Default)]
pub struct TestGrammar {
    vowel: String,
    consonant: String,
    number: String,
    casesensitive: String,
    patterns: Vec<PatternConfig>,
}

impl TestGrammar {
    /// Create a builder with all class sets empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the standard Latin class sets.
    #[must_use]
    pub fn latin() -> Self {
        Self {
            vowel: "aeiou".to_string(),
            consonant: "bcdfghjklmnpqrstvwxyz".to_string(),
            number: "0123456789".to_string(),
            casesensitive: String::new(),
            patterns: Vec::new(),
        }
    }

    /// Set the consonant class.
    #[must_use]
    pub fn consonants(mut self, set: impl Into<String>) -> Self {
        self.consonant = set.into();
        self
    }

    /// Set the case-sensitive set.
    #[must_use]
    pub fn case_sensitive(mut self, set: impl Into<String>) -> Self {
        self.casesensitive = set.into();
        self
    }

    /// Add an unconditional pattern.
    #[must_use]
    pub fn pattern(mut self, find: impl Into<String>, replace: impl Into<String>) -> Self {
        self.patterns.push(PatternConfig {
            find: find.into(),
            replace: replace.into(),
            rules: Vec::new(),
        });
        self
    }

    /// Add a conditional pattern with its rules.
    #[must_use]
    pub fn conditional(
        mut self,
        find: impl Into<String>,
        replace: impl Into<String>,
        rules: Vec<RuleConfig>,
    ) -> Self {
        self.patterns.push(PatternConfig {
            find: find.into(),
            replace: replace.into(),
            rules,
        });
        self
    }

    /// The raw configuration.
    #[must_use]
    pub fn config(&self) -> GrammarConfig {
        GrammarConfig {
            vowel: self.vowel.clone(),
            consonant: self.consonant.clone(),
            number: self.number.clone(),
            casesensitive: self.casesensitive.clone(),
            patterns: self.patterns.clone(),
        }
    }

    /// Compile into a [`Grammar`].
    ///
    /// # Errors
    ///
    /// Everything [`Grammar::from_config`] can return.
    pub fn compile(&self) -> Result<Grammar, GrammarError> {
        Grammar::from_config(self.config())
    }

    /// Compile and wrap in an [`Engine`].
    ///
    /// # Errors
    ///
    /// Everything [`Grammar::from_config`] can return.
    pub fn engine(&self) -> Result<Engine, GrammarError> {
        Ok(Engine::new(self.compile()?))
    }
}

/// Build a rule from its matches and replacement.
#[must_use]
pub fn rule(matches: Vec<MatchConfig>, replace: impl Into<String>) -> RuleConfig {
    RuleConfig {
        matches,
        replace: replace.into(),
    }
}

/// Build a match condition without a value (class scopes).
#[must_use]
pub fn when(kind: &str, scope: &str) -> MatchConfig {
    MatchConfig {
        kind: kind.to_string(),
        scope: scope.to_string(),
        value: None,
    }
}

/// Build a match condition with a value (exact scope).
#[must_use]
pub fn when_value(kind: &str, scope: &str, value: &str) -> MatchConfig {
    MatchConfig {
        kind: kind.to_string(),
        scope: scope.to_string(),
        value: Some(value.to_string()),
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{rule, when, when_value, TestGrammar};
    pub use okkhor::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_a_working_engine() {
        let engine = TestGrammar::latin()
            .pattern("a", "A")
            .pattern("ab", "AB")
            .engine()
            .unwrap();

        assert_eq!(engine.parse("aba"), "ABA");
    }

    #[test]
    fn conditional_pattern_with_rules() {
        let engine = TestGrammar::latin()
            .conditional(
                "x",
                "DEFAULT",
                vec![rule(vec![when("prefix", "punctuation")], "START")],
            )
            .engine()
            .unwrap();

        assert_eq!(engine.parse("x"), "START");
        assert_eq!(engine.parse("kx"), "kDEFAULT");
    }

    #[test]
    fn exact_value_condition() {
        let engine = TestGrammar::latin()
            .conditional(
                "x",
                "DEFAULT",
                vec![rule(vec![when_value("suffix", "exact", "q")], "BEFORE-Q")],
            )
            .engine()
            .unwrap();

        assert_eq!(engine.parse("xq"), "BEFORE-Qq");
        assert_eq!(engine.parse("xa"), "DEFAULTa");
    }

    #[test]
    fn invalid_scope_is_rejected_at_compile_time() {
        let result = TestGrammar::latin()
            .conditional("x", "d", vec![rule(vec![when("prefix", "banana")], "r")])
            .compile();

        assert!(matches!(result, Err(GrammarError::UnknownScope { .. })));
    }

    #[test]
    fn empty_find_is_rejected() {
        let result = TestGrammar::latin().pattern("", "nothing").compile();

        assert!(matches!(result, Err(GrammarError::EmptyFind { index: 0 })));
    }
}
