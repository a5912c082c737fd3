//! Promptbuddy: flatten prompt documents for language models.
//!
//! A prompt document mixes free text with directives that pull in workspace
//! files (`<context>`), the pending diff (`<diff/>`) and notes
//! (`<pb-note>`). [`segment`] splits a document into [`Segment`]s and
//! [`Expander`] resolves them into one flat string, isolating every failure
//! as an inline placeholder.

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod expand;
pub mod fs;
pub mod git;
pub mod logging;
pub mod segment;
pub mod workspace;

#[cfg(test)]
pub(crate) mod test_support;

pub use expand::{Expander, expand_document};
pub use segment::{Segment, TagSet, segment};
