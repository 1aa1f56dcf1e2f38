//! Transcript segmentation: one global-fields segment plus one segment
//! per dictated item.

use tracing::debug;

use super::matcher::occurrences;

/// Phrases that introduce a new dictated line item.
pub const ITEM_SPLITTERS: [&str; 4] = ["add item", "new item", "next item", "add product"];

/// A transcript split into its global portion and item portions.
///
/// Splitter phrases themselves are dropped from segment content; empty
/// segments (two adjacent splitters) are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptSegments {
    /// Text before the first item splitter (the whole transcript when
    /// no splitter occurs), lowercased and trimmed.
    pub global: String,
    /// One segment per item splitter occurrence, in transcript order.
    pub items: Vec<String>,
}

/// Normalize a transcript (lowercase, trim) and split it at the item
/// splitter phrases.
///
/// Splitters respect the same word-boundary rule as field triggers, so
/// a phrase embedded in a longer word does not start an item.
pub fn segment_transcript(transcript: &str) -> TranscriptSegments {
    let normalized = transcript.to_lowercase();
    let normalized = normalized.trim();

    // Every word-bounded splitter occurrence, ordered by position;
    // overlapping occurrences keep the earlier one.
    let mut splits: Vec<(usize, usize)> = ITEM_SPLITTERS
        .iter()
        .flat_map(|phrase| {
            occurrences(normalized, phrase)
                .into_iter()
                .map(|start| (start, phrase.len()))
        })
        .collect();
    splits.sort_unstable_by_key(|&(start, _)| start);

    let mut boundaries: Vec<(usize, usize)> = Vec::with_capacity(splits.len());
    for (start, len) in splits {
        if boundaries
            .last()
            .is_none_or(|&(prev_start, prev_len)| start >= prev_start + prev_len)
        {
            boundaries.push((start, len));
        }
    }

    if boundaries.is_empty() {
        return TranscriptSegments {
            global: normalized.to_string(),
            items: Vec::new(),
        };
    }

    let global = normalized[..boundaries[0].0].trim().to_string();

    let mut items = Vec::new();
    for (i, &(start, len)) in boundaries.iter().enumerate() {
        let content_start = start + len;
        let content_end = boundaries
            .get(i + 1)
            .map_or(normalized.len(), |&(next_start, _)| next_start);

        let segment = normalized[content_start..content_end].trim();
        if !segment.is_empty() {
            items.push(segment.to_string());
        }
    }

    debug!(
        "segmented transcript into global ({} chars) + {} item segment(s)",
        global.len(),
        items.len()
    );

    TranscriptSegments {
        global,
        items,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_splitter_means_whole_transcript_is_global() {
        let segments = segment_transcript("Client Name Acme Corp");
        assert_eq!(segments.global, "client name acme corp");
        assert!(segments.items.is_empty());
    }

    #[test]
    fn test_single_item_segment() {
        let segments = segment_transcript("client name acme add item description soap");
        assert_eq!(segments.global, "client name acme");
        assert_eq!(segments.items, vec!["description soap"]);
    }

    #[test]
    fn test_multiple_items_split_on_each_splitter() {
        let segments = segment_transcript(
            "add item description soap price 100 add item description towel price 50",
        );
        assert_eq!(segments.global, "");
        assert_eq!(
            segments.items,
            vec!["description soap price 100", "description towel price 50"]
        );
    }

    #[test]
    fn test_mixed_splitter_phrases() {
        let segments =
            segment_transcript("add item description soap next item description towel");
        assert_eq!(
            segments.items,
            vec!["description soap", "description towel"]
        );
    }

    #[test]
    fn test_adjacent_splitters_produce_no_empty_segment() {
        let segments = segment_transcript("add item new item description soap");
        assert_eq!(segments.items, vec!["description soap"]);
    }

    #[test]
    fn test_trailing_splitter_discarded() {
        let segments = segment_transcript("client name acme add item");
        assert_eq!(segments.global, "client name acme");
        assert!(segments.items.is_empty());
    }

    #[test]
    fn test_splitter_inside_word_does_not_split() {
        let segments = segment_transcript("badd item description soap");
        assert_eq!(segments.global, "badd item description soap");
        assert!(segments.items.is_empty());
    }

    #[test]
    fn test_empty_and_whitespace_transcripts() {
        assert_eq!(segment_transcript(""), TranscriptSegments::default());
        assert_eq!(segment_transcript("   "), TranscriptSegments::default());
    }
}
