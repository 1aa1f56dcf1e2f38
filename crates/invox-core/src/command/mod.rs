//! Voice-command parsing pipeline.
//!
//! Control flow: transcript -> [`segmenter`] -> global segment through
//! [`matcher`] + [`extractor`] + [`normalize`], item segments through
//! the same stages plus item assembly in [`parser`].

pub mod extractor;
pub mod matcher;
pub mod normalize;
pub mod parser;
pub mod rules;
pub mod segmenter;

pub use matcher::TriggerMatch;
pub use parser::{CommandParser, VoiceCommandParser};
pub use rules::{Destination, RuleTable, TriggerRule, global_rules, item_rules};
pub use segmenter::{TranscriptSegments, segment_transcript};
