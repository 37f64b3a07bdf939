//! Engine - the single-pass rewrite scanner.
//!
//! Construction builds two pattern indices from the grammar: unconditional
//! patterns (no rules) and conditional patterns (rule-bearing). `parse`
//! case-normalizes the input, then walks it left to right, consulting the
//! indices in strict priority order and delegating conditional matches to
//! the rule evaluator.

use crate::char_class::{lowercase, CharClasses};
use crate::evaluator::rule_replacement;
use crate::grammar::Grammar;
use crate::pattern::Pattern;
use crate::trie::Trie;
use crate::GrammarError;
use std::path::Path;

/// The transliteration engine.
///
/// # INV: read-only after construction
///
/// Both indices are built exactly once in [`new`](Self::new) and never
/// mutated afterwards, so a constructed engine is `Send + Sync` and may be
/// shared across threads without locking. No state is mutated during
/// [`parse`](Self::parse).
///
/// # INV: index priority
///
/// An unconditional-pattern match at a position always wins over a
/// conditional-pattern match at the same position, even when the
/// conditional pattern's matched text is longer. Unconditional replacements
/// (digits, fixed multi-character sequences) are unambiguous and are never
/// second-guessed by context rules.
///
/// # Example
///
/// ```
/// use okkhor::Engine;
///
/// let engine = Engine::bundled().unwrap();
/// assert_eq!(engine.parse("krri"), "কৃ");
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    classes: CharClasses,
    unconditional: Trie<Pattern>,
    conditional: Trie<Pattern>,
}

impl Engine {
    /// Build an engine from a compiled grammar.
    ///
    /// Patterns with rules go to the conditional index, the rest to the
    /// unconditional index. Duplicate `find` strings within one index keep
    /// the later insertion (last insert wins).
    #[must_use]
    pub fn new(grammar: Grammar) -> Self {
        let (classes, patterns) = grammar.into_parts();
        let mut unconditional = Trie::new();
        let mut conditional = Trie::new();

        for pattern in patterns {
            let find = pattern.find.clone();
            if pattern.is_unconditional() {
                unconditional.insert(&find, pattern);
            } else {
                conditional.insert(&find, pattern);
            }
        }

        Self {
            classes,
            unconditional,
            conditional,
        }
    }

    /// Build an engine from a grammar file.
    ///
    /// # Errors
    ///
    /// Everything [`Grammar::from_file`] can return.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GrammarError> {
        Ok(Self::new(Grammar::from_file(path)?))
    }

    /// Build an engine from the bundled reference grammar.
    ///
    /// # Errors
    ///
    /// Only if the bundled resource is malformed (a broken build).
    pub fn bundled() -> Result<Self, GrammarError> {
        Ok(Self::new(Grammar::bundled()?))
    }

    /// Transliterate `input`. Total: any character sequence is accepted and
    /// unmatched characters pass through unchanged.
    #[must_use]
    pub fn parse(&self, input: &str) -> String {
        let text = self.fix_case(input);
        let mut output = String::new();
        let mut cur_end = 0;

        for cur in 0..text.len() {
            // Positions covered by a previous match are already consumed.
            if cur < cur_end {
                continue;
            }

            if let Some(pattern) = self.unconditional.search_longest(&text, cur) {
                output.push_str(&pattern.replace);
                cur_end = cur + pattern.find_len;
            } else if let Some(pattern) = self.conditional.search_longest(&text, cur) {
                cur_end = cur + pattern.find_len;
                match rule_replacement(&pattern.rules, &text, cur, cur_end, &self.classes) {
                    Some(replacement) => output.push_str(replacement),
                    None => output.push_str(&pattern.replace),
                }
            } else {
                output.push(text[cur]);
                cur_end = cur + 1;
            }
        }

        output
    }

    /// Alias for [`parse`](Self::parse), kept for API compatibility with the
    /// original library surface.
    #[must_use]
    pub fn convert(&self, input: &str) -> String {
        self.parse(input)
    }

    /// The engine's character classes.
    #[must_use]
    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    /// The unconditional pattern index.
    #[must_use]
    pub fn unconditional(&self) -> &Trie<Pattern> {
        &self.unconditional
    }

    /// The conditional (rule-bearing) pattern index.
    #[must_use]
    pub fn conditional(&self) -> &Trie<Pattern> {
        &self.conditional
    }

    /// Case-normalize: keep characters that are (or whose lowercase form is)
    /// in the case-sensitive set, lowercase everything else. All cursor
    /// arithmetic in the scan operates on this normalized character vector.
    fn fix_case(&self, input: &str) -> Vec<char> {
        input
            .chars()
            .map(|c| {
                if self.classes.is_case_sensitive(c) {
                    c
                } else {
                    lowercase(c)
                }
            })
            .collect()
    }
}
