//! Grammar - the immutable in-memory grammar value and its loaders.
//!
//! A [`Grammar`] is the compiled form of the JSON grammar document: character
//! classes plus runtime patterns, validated eagerly. Loading and parsing
//! failures are explicit [`GrammarError`] kinds; there is no hidden global
//! grammar cache. Callers construct an [`Engine`](crate::Engine) at their
//! composition root and share it by reference.

use crate::char_class::CharClasses;
use crate::config::GrammarConfig;
use crate::pattern::Pattern;
use crate::GrammarError;
use std::path::Path;

/// The bundled reference phonetic grammar (Avro, Bengali).
const BUNDLED_GRAMMAR: &str = include_str!("../resources/grammar.json");

/// Immutable in-memory grammar: character classes and pattern definitions.
#[derive(Debug, Clone)]
pub struct Grammar {
    classes: CharClasses,
    patterns: Vec<Pattern>,
}

impl Grammar {
    /// Compile an already-deserialized grammar config.
    ///
    /// # Errors
    ///
    /// Any pattern/rule compilation error ([`GrammarError::EmptyFind`],
    /// [`GrammarError::UnknownScope`], [`GrammarError::UnknownMatchType`]).
    pub fn from_config(config: GrammarConfig) -> Result<Self, GrammarError> {
        let classes = CharClasses::new(
            &config.vowel,
            &config.consonant,
            &config.number,
            &config.casesensitive,
        );
        let patterns = config
            .patterns
            .iter()
            .enumerate()
            .map(|(index, p)| p.compile(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { classes, patterns })
    }

    /// Compile a grammar from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// [`GrammarError::InvalidConfig`] when the value does not have the
    /// grammar shape, plus any compilation error.
    pub fn from_value(value: serde_json::Value) -> Result<Self, GrammarError> {
        let config: GrammarConfig =
            serde_json::from_value(value).map_err(|e| GrammarError::InvalidConfig {
                source: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Parse and compile a grammar from JSON text.
    ///
    /// # Errors
    ///
    /// [`GrammarError::MalformedSource`] when the text is not a valid
    /// serialized grammar, plus any compilation error.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let config: GrammarConfig =
            serde_json::from_str(json).map_err(|e| GrammarError::MalformedSource {
                source: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Read, parse and compile a grammar file.
    ///
    /// # Errors
    ///
    /// [`GrammarError::SourceUnavailable`] when the file cannot be read,
    /// then everything [`from_json`](Self::from_json) can return.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GrammarError> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|e| GrammarError::SourceUnavailable {
                path: path.display().to_string(),
                source: e.to_string(),
            })?;
        Self::from_json(&json)
    }

    /// The reference phonetic grammar shipped with the crate.
    ///
    /// # Errors
    ///
    /// Only if the bundled resource is malformed, which indicates a broken
    /// build rather than a caller mistake.
    pub fn bundled() -> Result<Self, GrammarError> {
        Self::from_json(BUNDLED_GRAMMAR)
    }

    /// The grammar's character classes.
    #[must_use]
    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    /// The compiled patterns, in authoring order.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Consume the grammar, yielding its parts. Used by the engine when
    /// building its indices.
    #[must_use]
    pub fn into_parts(self) -> (CharClasses, Vec<Pattern>) {
        (self.classes, self.patterns)
    }
}
