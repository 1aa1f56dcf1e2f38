//! Data models for parsed voice commands.

pub mod command;

pub use command::{FieldPath, ItemDraft, ItemField, ParseOutcome, ValueKind};
