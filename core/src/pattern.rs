//! Pattern, Rule and ContextMatch - the compiled grammar entries.
//!
//! These are the runtime counterparts of the serde config types in
//! [`config`](crate::config). Everything here is immutable once built.

/// Which side of a matched pattern a context condition inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The character (or span) immediately before the match.
    Prefix,
    /// The character (or span) immediately after the match.
    Suffix,
}

/// The character classification a context condition tests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Punctuation, with the string boundary on the inspected side counting
    /// as punctuation.
    Punctuation,
    /// One of the five romanized vowels (builtin alphabet).
    Vowel,
    /// A member of the grammar's consonant set.
    Consonant,
    /// An exact literal neighbor, compared as a span.
    Exact,
}

/// One context condition: checks the character class or exact literal text
/// immediately before/after a pattern's matched span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMatch {
    /// Which side to inspect.
    pub kind: MatchKind,
    /// What to test the inspected position against.
    pub scope: Scope,
    /// Invert the verdict. Written as a `!` sigil on the scope in grammar
    /// source (`"!consonant"`).
    pub negated: bool,
    /// The literal for [`Scope::Exact`]; empty for the other scopes.
    pub value: String,
}

/// An ordered set of context conditions guarding an alternative replacement.
///
/// A rule fires only when every condition holds (logical AND, evaluated in
/// order, short-circuiting on the first failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The conditions, all of which must hold.
    pub matches: Vec<ContextMatch>,
    /// The replacement emitted when this rule fires.
    pub replace: String,
}

/// A literal source string mapped to a default replacement, optionally
/// guarded by context rules.
///
/// `rules` empty means unconditional: the pattern always rewrites to
/// `replace`. Non-empty means conditional: the first firing rule supplies
/// the replacement, falling back to `replace` when none fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The source text to find.
    pub find: String,
    /// `find` length in characters (not bytes); cached because the scanner
    /// advances its cursor by this amount on every match.
    pub find_len: usize,
    /// The default replacement.
    pub replace: String,
    /// Context rules, evaluated in declared order.
    pub rules: Vec<Rule>,
}

impl Pattern {
    /// Create a pattern. `find_len` is derived from `find`.
    #[must_use]
    pub fn new(find: impl Into<String>, replace: impl Into<String>, rules: Vec<Rule>) -> Self {
        let find = find.into();
        let find_len = find.chars().count();
        Self {
            find,
            find_len,
            replace: replace.into(),
            rules,
        }
    }

    /// Returns `true` if this pattern carries no context rules.
    #[must_use]
    pub fn is_unconditional(&self) -> bool {
        self.rules.is_empty()
    }
}
