//! Rule evaluation - pure functions over a pattern's context rules.
//!
//! Given the case-normalized text and the span a conditional pattern matched
//! (`cur` inclusive, `cur_end` exclusive), decide which rule (if any) fires.
//! First rule whose every condition holds wins; no firing rule means the
//! caller falls back to the pattern's default replacement.

use crate::char_class::CharClasses;
use crate::pattern::{ContextMatch, MatchKind, Rule, Scope};

/// Evaluate `rules` in declared order and return the winning replacement.
///
/// Returns `None` when no rule's conditions all hold; the caller then uses
/// the pattern's own default `replace`.
pub(crate) fn rule_replacement<'a>(
    rules: &'a [Rule],
    text: &[char],
    cur: usize,
    cur_end: usize,
    classes: &CharClasses,
) -> Option<&'a str> {
    rules
        .iter()
        .find(|rule| {
            // A rule with no conditions never fires (it would shadow the
            // pattern's default replacement for no reason).
            !rule.matches.is_empty()
                && rule
                    .matches
                    .iter()
                    .all(|m| match_holds(m, text, cur, cur_end, classes))
        })
        .map(|rule| rule.replace.as_str())
}

/// Evaluate one context condition against the matched span.
pub(crate) fn match_holds(
    m: &ContextMatch,
    text: &[char],
    cur: usize,
    cur_end: usize,
    classes: &CharClasses,
) -> bool {
    match m.scope {
        Scope::Punctuation => {
            // The string boundary on the inspected side counts as punctuation.
            let base = match m.kind {
                MatchKind::Prefix => cur == 0 || classes.is_punctuation(text[cur - 1]),
                MatchKind::Suffix => cur_end >= text.len() || classes.is_punctuation(text[cur_end]),
            };
            base != m.negated
        }
        Scope::Vowel | Scope::Consonant => {
            // Out of bounds is never a vowel or consonant.
            let chk = match m.kind {
                MatchKind::Prefix => cur.checked_sub(1),
                MatchKind::Suffix => (cur_end < text.len()).then_some(cur_end),
            };
            let base = chk.is_some_and(|i| match m.scope {
                Scope::Vowel => classes.is_vowel(text[i]),
                _ => classes.is_consonant(text[i]),
            });
            base != m.negated
        }
        Scope::Exact => {
            let value_len = m.value.chars().count();
            let (start, end) = match m.kind {
                MatchKind::Prefix => (cur as isize - value_len as isize, cur as isize),
                MatchKind::Suffix => (cur_end as isize, (cur_end + value_len) as isize),
            };
            exact_span_matches(&m.value, text, start, end, m.negated)
        }
    }
}

/// Compare the literal `value` against `text[start..end)`.
///
/// A span that falls outside the text yields the negation flag itself: a
/// plain exact match cannot hold at a boundary where the neighbor does not
/// exist, while a negated one holds there for the same reason. This
/// asymmetry is load-bearing for grammars using `"!exact"` guards.
fn exact_span_matches(value: &str, text: &[char], start: isize, end: isize, negated: bool) -> bool {
    if start < 0 || end > text.len() as isize {
        return negated;
    }
    let span = &text[start as usize..end as usize];
    let eq = span.iter().copied().eq(value.chars());
    eq != negated
}
