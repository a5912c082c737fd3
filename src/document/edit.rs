use crate::segment::{Segment, SegmentSpan, TagSet, segment_spans_with};

/// The paths of the first context block, or an empty list when there is none.
pub fn context_paths(text: &str, tags: &TagSet) -> Vec<String> {
    match first_context_block(text, tags) {
        Some((_, paths, _)) => paths,
        None => Vec::new(),
    }
}

/// Append `paths` to the first context block, skipping any already listed.
///
/// Without a context block, a new block using the primary context spelling
/// is appended to the end of the document. Returns the text unchanged when
/// nothing new was added.
pub fn add_paths(text: &str, tags: &TagSet, paths: &[String]) -> String {
    match first_context_block(text, tags) {
        Some((span, mut existing, tag)) => {
            let before = existing.len();
            push_unique(&mut existing, paths);
            if existing.len() == before {
                return text.to_string();
            }
            splice(text, &span, &render_block(&tag, &existing))
        }
        None => {
            let mut added = Vec::new();
            push_unique(&mut added, paths);
            // Tag sets without context spellings cannot hold paths.
            let Some(tag) = tags.primary_context_tag() else {
                return text.to_string();
            };
            if added.is_empty() {
                return text.to_string();
            }
            append_block(text, &render_block(tag, &added))
        }
    }
}

/// Remove `paths` from the first context block. An emptied block stays in
/// place as `<tag>\n</tag>`.
pub fn remove_paths(text: &str, tags: &TagSet, paths: &[String]) -> String {
    let Some((span, existing, tag)) = first_context_block(text, tags) else {
        return text.to_string();
    };

    let remaining: Vec<String> = existing
        .iter()
        .filter(|p| !paths.iter().any(|r| r.trim() == p.as_str()))
        .cloned()
        .collect();
    if remaining.len() == existing.len() {
        return text.to_string();
    }
    splice(text, &span, &render_block(&tag, &remaining))
}

fn first_context_block(text: &str, tags: &TagSet) -> Option<(SegmentSpan, Vec<String>, String)> {
    segment_spans_with(text, tags)
        .into_iter()
        .find_map(|span| {
            let Segment::ContextBlock { paths } = &span.segment else {
                return None;
            };
            let paths = paths.clone();
            let tag = span.tag.clone()?;
            Some((span, paths, tag))
        })
}

fn push_unique(into: &mut Vec<String>, paths: &[String]) {
    for path in paths {
        let path = path.trim();
        if !path.is_empty() && !into.iter().any(|p| p == path) {
            into.push(path.to_string());
        }
    }
}

fn render_block(tag: &str, paths: &[String]) -> String {
    let mut block = format!("<{}>\n", tag);
    for path in paths {
        block.push_str(path);
        block.push('\n');
    }
    block.push_str(&format!("</{}>", tag));
    block
}

fn splice(text: &str, span: &SegmentSpan, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..span.range.start]);
    out.push_str(replacement);
    out.push_str(&text[span.range.end..]);
    out
}

fn append_block(text: &str, block: &str) -> String {
    let body = text.trim_end();
    if body.is_empty() {
        format!("{}\n", block)
    } else {
        format!("{}\n\n{}\n", body, block)
    }
}
