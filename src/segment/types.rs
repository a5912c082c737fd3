//! Segment types produced by the parser.

use serde::Serialize;
use std::ops::Range;

/// One piece of a parsed prompt document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Literal text found between directives, untrimmed.
    Text { content: String },

    /// Workspace-relative file paths to inline, in document order.
    ContextBlock { paths: Vec<String> },

    /// Version-control diff request. `None` diffs the working tree against `HEAD`.
    DiffBlock { branch: Option<String> },

    /// Free-form note, inner text trimmed. Never expanded.
    Note { content: String },
}

impl Segment {
    /// Returns true for segments produced from a tag.
    pub fn is_directive(&self) -> bool {
        !matches!(self, Segment::Text { .. })
    }

    /// Short name of the segment kind, used for display.
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Text { .. } => "text",
            Segment::ContextBlock { .. } => "context",
            Segment::DiffBlock { .. } => "diff",
            Segment::Note { .. } => "note",
        }
    }
}

/// A segment together with the part of the input it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSpan {
    /// The parsed segment.
    pub segment: Segment,
    /// Byte range of the source text covered by this segment.
    pub range: Range<usize>,
    /// Tag spelling that matched, `None` for text.
    pub tag: Option<String>,
}

impl SegmentSpan {
    pub(crate) fn text(source: &str, range: Range<usize>) -> Self {
        Self {
            segment: Segment::Text {
                content: source[range.clone()].to_string(),
            },
            range,
            tag: None,
        }
    }

    /// The slice of `source` this segment was parsed from.
    ///
    /// `source` must be the text the span was produced from.
    pub fn source<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }
}
