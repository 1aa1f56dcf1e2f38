//! Trigger matching: phrase occurrence scanning, word-boundary checks,
//! and longest-match overlap resolution.

use tracing::trace;

use super::rules::{Destination, RuleTable};

/// One accepted occurrence of a trigger phrase in a segment.
#[derive(Debug, Clone)]
pub struct TriggerMatch<D> {
    /// The phrase that matched.
    pub phrase: String,
    /// Byte offset of the match start in the segment.
    pub start: usize,
    /// Byte length of the phrase.
    pub len: usize,
    /// Destination the following value is written to.
    pub destination: D,
}

impl<D> TriggerMatch<D> {
    /// Byte offset one past the end of the matched phrase.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end() && self.end() > other.start
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// All word-bounded occurrences of `phrase` in `text`, left to right,
/// advancing one character past each found start.
///
/// An occurrence is accepted only when the characters on both sides
/// are not `[a-zA-Z0-9]`; text boundaries count as non-word. This is
/// what keeps "date" from matching inside "update".
pub(crate) fn occurrences(text: &str, phrase: &str) -> Vec<usize> {
    let mut found = Vec::new();
    if phrase.is_empty() {
        return found;
    }

    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(pos) = text[from..].find(phrase) {
        let start = from + pos;
        let end = start + phrase.len();

        let open = start == 0 || !is_word_byte(bytes[start - 1]);
        let close = end >= bytes.len() || !is_word_byte(bytes[end]);
        if open && close {
            found.push(start);
        }

        // Advance by one character so overlapping self-occurrences are
        // still discovered; offsets stay on char boundaries because the
        // slice at `start` begins with the phrase's first char.
        let step = text[start..]
            .chars()
            .next()
            .map_or(1, |c| c.len_utf8());
        from = start + step;
    }

    found
}

/// Scan a segment for every trigger phrase of every rule.
///
/// Candidates come back in discovery order (rule order, then phrase
/// order, then position), which the overlap filter relies on for
/// stable tie-breaking.
pub fn find_triggers<D: Destination>(text: &str, table: &RuleTable<D>) -> Vec<TriggerMatch<D>> {
    let mut candidates = Vec::new();

    for rule in table.rules() {
        for phrase in &rule.triggers {
            for start in occurrences(text, phrase) {
                candidates.push(TriggerMatch {
                    phrase: phrase.clone(),
                    start,
                    len: phrase.len(),
                    destination: rule.destination,
                });
            }
        }
    }

    candidates
}

/// Resolve overlapping candidates, longer phrases first, and order the
/// survivors by position.
///
/// The sort is stable, so equal-length candidates keep discovery
/// order; a candidate is kept only when its span intersects no
/// already-kept span. "client email" therefore beats the bare "email"
/// wherever the two coincide.
pub fn resolve_overlaps<D: Destination>(
    mut candidates: Vec<TriggerMatch<D>>,
) -> Vec<TriggerMatch<D>> {
    candidates.sort_by(|a, b| b.len.cmp(&a.len));

    let mut active: Vec<TriggerMatch<D>> = Vec::new();
    for candidate in candidates {
        if !active.iter().any(|kept| kept.overlaps(&candidate)) {
            active.push(candidate);
        }
    }

    active.sort_by_key(|m| m.start);
    active
}

/// Match a segment against a rule table: scan, filter overlaps, order.
pub fn match_triggers<D: Destination>(text: &str, table: &RuleTable<D>) -> Vec<TriggerMatch<D>> {
    let active = resolve_overlaps(find_triggers(text, table));
    trace!("matched {} triggers in segment", active.len());
    active
}
