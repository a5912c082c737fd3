//! Implementation of the `promptbuddy segment` command.

use super::{Session, read_document};
use crate::cli::SegmentArgs;
use crate::error::{PromptError, Result};
use crate::segment::{Segment, SegmentSpan, segment_spans_with};

/// Longest text preview shown per segment in the table.
const PREVIEW_CHARS: usize = 48;

/// Execute the `promptbuddy segment` command.
pub fn cmd_segment(args: SegmentArgs, session: &Session) -> Result<()> {
    let text = read_document(args.file.as_deref())?;
    let tags = session.config.tag_set()?;
    let spans = segment_spans_with(&text, &tags);

    if args.json {
        println!("{}", render_json(&spans)?);
    } else {
        print!("{}", render_table(&spans));
    }
    Ok(())
}

fn render_json(spans: &[SegmentSpan]) -> Result<String> {
    let segments: Vec<&Segment> = spans.iter().map(|span| &span.segment).collect();
    serde_json::to_string_pretty(&segments)
        .map_err(|e| PromptError::UserError(format!("failed to serialize segments: {}", e)))
}

/// One line per segment: kind, byte range and a short description.
fn render_table(spans: &[SegmentSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        let range = format!("{}..{}", span.range.start, span.range.end);
        let detail = match &span.segment {
            Segment::Text { content } | Segment::Note { content } => preview(content),
            Segment::ContextBlock { paths } if paths.is_empty() => "(no paths)".to_string(),
            Segment::ContextBlock { paths } => paths.join(", "),
            Segment::DiffBlock { branch } => match branch {
                Some(branch) => format!("branch {}", branch),
                None => "working tree".to_string(),
            },
        };
        out.push_str(&format!(
            "{:<8} {:<12} {}\n",
            span.segment.kind(),
            range,
            detail
        ));
    }
    out
}

fn preview(content: &str) -> String {
    let escaped = format!("{:?}", content);
    if escaped.chars().count() <= PREVIEW_CHARS {
        escaped
    } else {
        let head: String = escaped.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{}...", head)
    }
}
