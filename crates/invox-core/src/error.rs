//! Error types for the invox-core library.

use thiserror::Error;

/// Main error type for the invox library.
///
/// Parsing itself is infallible: [`crate::VoiceCommandParser::parse`]
/// returns an empty outcome for unrecognizable input rather than an
/// error. Errors only arise when constructing custom rule tables.
#[derive(Error, Debug)]
pub enum InvoxError {
    /// Rule table construction error.
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),
}

/// Errors related to rule table construction.
#[derive(Error, Debug)]
pub enum RuleError {
    /// Two rules write to the same destination.
    #[error("duplicate destination in rule table: {destination}")]
    DuplicateDestination { destination: String },

    /// A rule has a blank trigger phrase.
    #[error("empty trigger phrase for destination: {destination}")]
    EmptyPhrase { destination: String },

    /// A rule has no trigger phrases at all.
    #[error("no trigger phrases for destination: {destination}")]
    NoPhrases { destination: String },
}

/// Result type for the invox library.
pub type Result<T> = std::result::Result<T, InvoxError>;
