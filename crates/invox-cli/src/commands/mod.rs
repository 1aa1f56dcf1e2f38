//! CLI command implementations.

pub mod batch;
pub mod parse;
pub mod triggers;
