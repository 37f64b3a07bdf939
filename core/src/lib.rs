//! okkhor - trie-backed phonetic transliteration engine for Bengali
//!
//! Converts romanized phonetic input ("Avro" style) into Bengali script by
//! applying a declarative grammar of find/replace patterns, some of which are
//! guarded by context-sensitive rules.
//!
//! # Architecture
//!
//! - [`Grammar`] — Immutable in-memory grammar: character classes plus the
//!   pattern/rule definitions, compiled eagerly from a serde config.
//! - [`Trie`] — Character-keyed prefix tree answering "longest pattern
//!   starting at this exact position" in time proportional to the match.
//! - `evaluator` — Pure rule evaluation: decides which context rule (if any)
//!   overrides a pattern's default replacement.
//! - [`Engine`] — The single-pass scanner: case-normalizes, then walks the
//!   text left to right consulting two pattern indices in fixed priority
//!   order (unconditional patterns always win over rule-bearing ones).
//!
//! # Key Design Insights
//!
//! 1. **Two indices, strict priority**: unconditional patterns (digits, fixed
//!    multi-character sequences) are unambiguous and are never second-guessed
//!    by context rules, even when a rule-bearing pattern would match more
//!    characters at the same position.
//!
//! 2. **Build once, share freely**: both tries are built at construction and
//!    never mutated afterwards. A constructed [`Engine`] is `Send + Sync` and
//!    safe to use from any number of threads without locking.
//!
//! 3. **Parse is total**: once an engine exists, [`Engine::parse`] has no
//!    failure modes. Unmatched characters pass through unchanged.
//!
//! # Example
//!
//! ```
//! use okkhor::Engine;
//!
//! let engine = Engine::bundled().unwrap();
//! assert_eq!(engine.parse("ami"), "আমি");
//! assert_eq!(engine.parse("bangla"), "বাংলা");
//! assert_eq!(engine.parse("..."), "...");
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod char_class;
mod config;
mod engine;
mod evaluator;
mod grammar;
mod pattern;
mod trie;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use char_class::CharClasses;
pub use config::{GrammarConfig, MatchConfig, PatternConfig, RuleConfig};
pub use engine::Engine;
pub use grammar::Grammar;
pub use pattern::{ContextMatch, MatchKind, Pattern, Rule, Scope};
pub use trie::Trie;

/// Prelude module for convenient imports.
///
/// ```
/// use okkhor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CharClasses, ContextMatch, Engine, Grammar, GrammarConfig, GrammarError, MatchConfig,
        MatchKind, Pattern, PatternConfig, Rule, RuleConfig, Scope, Trie,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from grammar loading and compilation.
///
/// These errors are caught at construction time, not during `parse`.
/// Fix the grammar and rebuild the engine; a successfully constructed
/// [`Engine`] never fails at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// An already-parsed grammar value has a missing or malformed field.
    InvalidConfig {
        /// The underlying error message.
        source: String,
    },
    /// A rule names a match type other than `"prefix"` or `"suffix"`.
    UnknownMatchType {
        /// The unrecognized match type.
        value: String,
    },
    /// A rule names an unrecognized scope.
    UnknownScope {
        /// The unrecognized scope token (after stripping any `!`).
        scope: String,
    },
    /// A pattern has an empty `find` string, which could never match.
    EmptyFind {
        /// Zero-based index of the offending pattern.
        index: usize,
    },
    /// The grammar file could not be read.
    SourceUnavailable {
        /// The path that was requested.
        path: String,
        /// The underlying I/O error message.
        source: String,
    },
    /// The grammar source is not a valid serialized grammar.
    MalformedSource {
        /// The underlying parse error message.
        source: String,
    },
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { source } => {
                write!(f, "invalid grammar: {source}")
            }
            Self::UnknownMatchType { value } => {
                write!(
                    f,
                    "unknown match type \"{value}\", expected \"prefix\" or \"suffix\""
                )
            }
            Self::UnknownScope { scope } => {
                write!(
                    f,
                    "unknown scope \"{scope}\", expected \"punctuation\", \"vowel\", \
                     \"consonant\" or \"exact\" (optionally prefixed with \"!\")"
                )
            }
            Self::EmptyFind { index } => {
                write!(f, "pattern at index {index} has an empty \"find\" string")
            }
            Self::SourceUnavailable { path, source } => {
                write!(f, "cannot read grammar file \"{path}\": {source}")
            }
            Self::MalformedSource { source } => {
                write!(f, "malformed grammar source: {source}")
            }
        }
    }
}

impl std::error::Error for GrammarError {}
