//! Voice-command parser: segments the transcript, matches triggers,
//! extracts and normalizes values, and assembles item drafts.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::models::command::{FieldPath, ItemDraft, ItemField, ParseOutcome};

use super::extractor::extract_values;
use super::matcher::match_triggers;
use super::normalize::{normalize, parse_number};
use super::rules::{RuleTable, global_rules, item_rules};
use super::segmenter::segment_transcript;

/// Trait for voice-command parsing.
pub trait CommandParser {
    /// Parse one finalized transcript into field updates and item drafts.
    ///
    /// Never fails: an unrecognizable transcript yields an empty
    /// outcome. Safe to call concurrently; all state is local to the
    /// call.
    fn parse(&self, transcript: &str) -> ParseOutcome;
}

/// Parser over a pair of trigger rule tables.
///
/// The default tables cover the invoice form's global fields and item
/// fields; both can be swapped for custom tables built with
/// [`RuleTable::new`].
#[derive(Debug, Clone)]
pub struct VoiceCommandParser {
    global_rules: RuleTable<FieldPath>,
    item_rules: RuleTable<ItemField>,
}

impl VoiceCommandParser {
    /// Create a parser with the built-in rule tables.
    pub fn new() -> Self {
        Self {
            global_rules: global_rules().clone(),
            item_rules: item_rules().clone(),
        }
    }

    /// Replace the global-field rule table.
    pub fn with_global_rules(mut self, rules: RuleTable<FieldPath>) -> Self {
        self.global_rules = rules;
        self
    }

    /// Replace the item-field rule table.
    pub fn with_item_rules(mut self, rules: RuleTable<ItemField>) -> Self {
        self.item_rules = rules;
        self
    }

    fn parse_global_fields(&self, segment: &str) -> BTreeMap<FieldPath, String> {
        let matches = match_triggers(segment, &self.global_rules);
        let mut updates = BTreeMap::new();

        for (path, raw) in extract_values(segment, &matches) {
            let value = normalize(path.kind(), &raw);
            if !value.is_empty() {
                updates.insert(path, value);
            }
        }

        updates
    }

    fn assemble_item(&self, segment: &str, id: u64) -> ItemDraft {
        let matches = match_triggers(segment, &self.item_rules);

        let mut description = None;
        let mut hsn = None;
        let mut quantity = None;
        let mut price = None;
        let mut igst = None;
        let mut cgst = None;
        let mut sgst = None;

        for (field, raw) in extract_values(segment, &matches) {
            match field {
                ItemField::Description => description = Some(raw),
                ItemField::Hsn => hsn = Some(raw),
                ItemField::Quantity => quantity = Some(parse_number(&raw)),
                ItemField::Price => price = Some(parse_number(&raw)),
                ItemField::Igst => igst = Some(parse_number(&raw)),
                ItemField::Cgst => cgst = Some(parse_number(&raw)),
                ItemField::Sgst => sgst = Some(parse_number(&raw)),
                // Recognized so its text never leaks into a neighbor;
                // the consumer derives line totals itself.
                ItemField::Total => {}
            }
        }

        ItemDraft {
            id,
            description: description.unwrap_or_else(|| "New Item".to_string()),
            hsn: hsn.unwrap_or_default(),
            quantity: quantity.unwrap_or(1.0),
            price: price.unwrap_or(0.0),
            igst: igst.unwrap_or(0.0),
            cgst: cgst.unwrap_or(0.0),
            sgst: sgst.unwrap_or(0.0),
        }
    }
}

impl Default for VoiceCommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser for VoiceCommandParser {
    fn parse(&self, transcript: &str) -> ParseOutcome {
        info!("parsing voice command ({} chars)", transcript.len());

        let segments = segment_transcript(transcript);
        let updates = self.parse_global_fields(&segments.global);

        let new_items = segments
            .items
            .iter()
            .enumerate()
            .map(|(i, segment)| self.assemble_item(segment, i as u64 + 1))
            .collect::<Vec<_>>();

        debug!(
            "recognized {} field update(s) and {} item(s)",
            updates.len(),
            new_items.len()
        );

        ParseOutcome { updates, new_items }
    }
}
