//! Left-to-right scan that splits a document into segments.

use super::grammar::TagSet;
use super::types::{Segment, SegmentSpan};
use std::sync::LazyLock;

static DEFAULT_TAGS: LazyLock<TagSet> = LazyLock::new(TagSet::default);

/// Split `text` into segments using the default tag spellings.
///
/// # Examples
///
/// ```
/// use promptbuddy::segment::{Segment, segment};
///
/// let segments = segment("Intro\n<context>\nfoo.py\n</context>\nOutro");
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Text { content: "Intro\n".to_string() },
///         Segment::ContextBlock { paths: vec!["foo.py".to_string()] },
///         Segment::Text { content: "\nOutro".to_string() },
///     ]
/// );
/// ```
pub fn segment(text: &str) -> Vec<Segment> {
    segment_with(text, &DEFAULT_TAGS)
}

/// Split `text` into segments using a custom tag set.
pub fn segment_with(text: &str, tags: &TagSet) -> Vec<Segment> {
    segment_spans_with(text, tags)
        .into_iter()
        .map(|span| span.segment)
        .collect()
}

/// Split `text` into segments with their source ranges, using the default
/// tag spellings.
pub fn segment_spans(text: &str) -> Vec<SegmentSpan> {
    segment_spans_with(text, &DEFAULT_TAGS)
}

/// Split `text` into segments with their source ranges.
///
/// The returned ranges are contiguous: the first starts at 0, each one starts
/// where the previous ended, and the last ends at `text.len()`. Empty input
/// yields no spans.
pub fn segment_spans_with(text: &str, tags: &TagSet) -> Vec<SegmentSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in tags.pattern().captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        // Unclassified matches stay in the surrounding text.
        let Some((segment, tag)) = tags.classify(&caps) else {
            continue;
        };

        if whole.start() > cursor {
            spans.push(SegmentSpan::text(text, cursor..whole.start()));
        }

        spans.push(SegmentSpan {
            segment,
            range: whole.range(),
            tag: Some(tag),
        });
        cursor = whole.end();
    }

    if cursor < text.len() {
        spans.push(SegmentSpan::text(text, cursor..text.len()));
    }

    spans
}
