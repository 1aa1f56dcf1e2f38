//! Core library for voice-driven invoice entry.
//!
//! This crate turns a finalized speech-to-text transcript into
//! structured invoice updates:
//! - Transcript segmentation (global fields vs. dictated line items)
//! - Trigger-phrase matching with word boundaries and longest-match
//!   overlap resolution
//! - Value extraction and per-field normalization (spoken emails,
//!   natural-language dates, numeric coercion)
//!
//! The entry point is [`VoiceCommandParser::parse`], which never fails:
//! an unrecognized transcript yields an empty [`ParseOutcome`].

pub mod command;
pub mod error;
pub mod models;

pub use command::parser::{CommandParser, VoiceCommandParser};
pub use command::rules::{RuleTable, TriggerRule, global_rules, item_rules};
pub use error::{InvoxError, Result, RuleError};
pub use models::command::{FieldPath, ItemDraft, ItemField, ParseOutcome, ValueKind};
