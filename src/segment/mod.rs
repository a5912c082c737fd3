//! Document segmentation for prompt files.
//!
//! A prompt document is free text interleaved with directives:
//!
//! ```text
//! Please review these files:
//! <context>
//! src/lib.rs
//! src/main.rs
//! </context>
//!
//! And the pending changes:
//! <diff branch="main"/>
//! ```
//!
//! `segment` splits such a document into an ordered list of [`Segment`]s.
//! Text outside directive spans is kept byte-for-byte, so the spans returned
//! by [`segment_spans`] always reconstruct the input exactly.
//!
//! Recognized tag spellings are configurable through [`TagSet`]; the default
//! accepts both `<context>` and the legacy `<pb-context>`.

mod grammar;
mod parser;
mod types;

#[cfg(test)]
mod tests;

pub use grammar::{DEFAULT_CONTEXT_TAGS, DEFAULT_DIFF_TAGS, DEFAULT_NOTE_TAGS, TagSet};
pub use parser::{segment, segment_spans, segment_spans_with, segment_with};
pub use types::{Segment, SegmentSpan};
