//! Tests for document segmentation.

use super::grammar::parse_paths;
use super::*;

fn text(content: &str) -> Segment {
    Segment::Text {
        content: content.to_string(),
    }
}

fn context(paths: &[&str]) -> Segment {
    Segment::ContextBlock {
        paths: paths.iter().map(|p| p.to_string()).collect(),
    }
}

fn diff(branch: Option<&str>) -> Segment {
    Segment::DiffBlock {
        branch: branch.map(str::to_string),
    }
}

/// Rebuild the input from the spans, checking they are contiguous.
fn reconstruct(input: &str, spans: &[SegmentSpan]) -> String {
    let mut cursor = 0;
    let mut out = String::new();
    for span in spans {
        assert_eq!(span.range.start, cursor, "spans must be contiguous");
        out.push_str(span.source(input));
        cursor = span.range.end;
    }
    assert_eq!(cursor, input.len());
    out
}

#[test]
fn test_plain_text_is_single_segment() {
    let input = "Just a question about\nsome code.\n";
    assert_eq!(segment(input), vec![text(input)]);
}

#[test]
fn test_empty_input_has_no_segments() {
    assert!(segment("").is_empty());
}

#[test]
fn test_context_block_between_text() {
    let segments = segment("Intro\n<context>\nfoo.py\n</context>\nOutro");
    assert_eq!(
        segments,
        vec![text("Intro\n"), context(&["foo.py"]), text("\nOutro")]
    );
}

#[test]
fn test_text_is_not_trimmed() {
    let segments = segment("  leading\n\n<diff/>\n\n  trailing  ");
    assert_eq!(
        segments,
        vec![text("  leading\n\n"), diff(None), text("\n\n  trailing  ")]
    );
}

#[test]
fn test_context_paths_skip_blank_lines_and_keep_order() {
    let segments = segment("<context>\n\n  b.rs\n\na.rs  \n\n</context>");
    assert_eq!(segments, vec![context(&["b.rs", "a.rs"])]);
}

#[test]
fn test_context_paths_are_not_deduplicated() {
    let segments = segment("<context>\na.py\na.py\n</context>");
    assert_eq!(segments, vec![context(&["a.py", "a.py"])]);
}

#[test]
fn test_crlf_paths() {
    let segments = segment("<context>\r\nsrc/lib.rs\r\nsrc/main.rs\r\n</context>");
    assert_eq!(segments, vec![context(&["src/lib.rs", "src/main.rs"])]);
}

#[test]
fn test_empty_context_block() {
    assert_eq!(segment("<context></context>"), vec![context(&[])]);
    assert_eq!(segment("<context>\n  \n</context>"), vec![context(&[])]);
}

#[test]
fn test_legacy_context_spelling() {
    let segments = segment("<pb-context>\nsrc/a.ts\n</pb-context>");
    assert_eq!(segments, vec![context(&["src/a.ts"])]);
}

#[test]
fn test_mismatched_closing_spelling_is_text() {
    let input = "<context>\na.rs\n</pb-context>";
    assert_eq!(segment(input), vec![text(input)]);
}

#[test]
fn test_diff_variants() {
    assert_eq!(segment("<diff/>"), vec![diff(None)]);
    assert_eq!(segment("<diff />"), vec![diff(None)]);
    assert_eq!(segment(r#"<diff branch="main"/>"#), vec![diff(Some("main"))]);
    assert_eq!(
        segment(r#"<diff branch="feature/login fix" />"#),
        vec![diff(Some("feature/login fix"))]
    );
}

#[test]
fn test_empty_branch_attribute_means_no_branch() {
    assert_eq!(segment(r#"<diff branch=""/>"#), vec![diff(None)]);
}

#[test]
fn test_diff_without_self_closing_slash_is_text() {
    let input = "<diff>";
    assert_eq!(segment(input), vec![text(input)]);
}

#[test]
fn test_note_block_is_trimmed() {
    let segments = segment("<pb-note>\n  remember the tests  \n</pb-note>");
    assert_eq!(
        segments,
        vec![Segment::Note {
            content: "remember the tests".to_string()
        }]
    );
}

#[test]
fn test_unterminated_context_block_is_text() {
    let input = "before <context>\nfoo.py\nno closing tag";
    assert_eq!(segment(input), vec![text(input)]);
}

#[test]
fn test_first_closing_delimiter_ends_block() {
    let input = "<context>\na.rs\n</context>\nb.rs\n</context>";
    assert_eq!(
        segment(input),
        vec![context(&["a.rs"]), text("\nb.rs\n</context>")]
    );
}

#[test]
fn test_nested_open_tag_becomes_a_path_line() {
    let input = "<context>\n<context>\na.rs\n</context>";
    assert_eq!(segment(input), vec![context(&["<context>", "a.rs"])]);
}

#[test]
fn test_multiple_directives_in_order() {
    let input = "A\n<context>\nx.rs\n</context>\nB\n<diff branch=\"dev\"/>\nC\n<context>\ny.rs\n</context>";
    assert_eq!(
        segment(input),
        vec![
            text("A\n"),
            context(&["x.rs"]),
            text("\nB\n"),
            diff(Some("dev")),
            text("\nC\n"),
            context(&["y.rs"]),
        ]
    );
}

#[test]
fn test_adjacent_directives_have_no_empty_text_between() {
    let segments = segment("<diff/><diff/>");
    assert_eq!(segments, vec![diff(None), diff(None)]);
}

#[test]
fn test_spans_reconstruct_input() {
    let inputs = [
        "",
        "plain",
        "Intro\n<context>\nfoo.py\n</context>\nOutro",
        "<diff/>middle<pb-note> n </pb-note>",
        "<context>\r\na\r\n</context>\n\n\n<diff branch=\"x\" />",
        "unterminated <context> here <pb-note>",
        "héllo <context>\nünï.rs\n</context> wörld",
    ];
    for input in inputs {
        let spans = segment_spans(input);
        assert_eq!(reconstruct(input, &spans), input);
    }
}

#[test]
fn test_spans_record_tag_spelling() {
    let spans = segment_spans("x<pb-context>a</pb-context><diff/>");
    let tags: Vec<Option<&str>> = spans.iter().map(|s| s.tag.as_deref()).collect();
    assert_eq!(tags, vec![None, Some("pb-context"), Some("diff")]);
    assert_eq!(spans[1].range, 1..27);
}

#[test]
fn test_custom_tag_set_replaces_defaults() {
    let tags = TagSet::new(&["files"], &["changes"], &[]).unwrap();
    let input = "<files>\na.rs\n</files>\n<changes branch=\"main\"/>\n<context>\nb.rs\n</context>";
    assert_eq!(
        segment_with(input, &tags),
        vec![
            context(&["a.rs"]),
            text("\n"),
            diff(Some("main")),
            text("\n<context>\nb.rs\n</context>"),
        ]
    );
}

#[test]
fn test_tag_names_are_escaped() {
    let tags = TagSet::new(&["ctx.v2"], &[], &[]).unwrap();
    assert_eq!(
        segment_with("<ctx.v2>a</ctx.v2>", &tags),
        vec![context(&["a"])]
    );
    let input = "<ctxXv2>a</ctxXv2>";
    assert_eq!(segment_with(input, &tags), vec![text(input)]);
}

#[test]
fn test_tag_set_rejects_invalid_names() {
    assert!(TagSet::new(&[""], &[], &[]).is_err());
    assert!(TagSet::new(&["has space"], &[], &[]).is_err());
    assert!(TagSet::new(&["1abc"], &[], &[]).is_err());
    assert!(TagSet::new(&["<context>"], &[], &[]).is_err());
}

#[test]
fn test_tag_set_rejects_duplicates_and_empty() {
    assert!(TagSet::new(&["context"], &["context"], &[]).is_err());
    let none: [&str; 0] = [];
    assert!(TagSet::new(&none, &none, &none).is_err());
}

#[test]
fn test_default_tag_set_accessors() {
    let tags = TagSet::default();
    assert_eq!(tags.context_tags(), ["context", "pb-context"]);
    assert_eq!(tags.diff_tags(), ["diff"]);
    assert_eq!(tags.note_tags(), ["pb-note"]);
    assert_eq!(tags.primary_context_tag(), Some("context"));
}

#[test]
fn test_parse_paths() {
    assert_eq!(parse_paths("\n a \n\n b\n"), vec!["a", "b"]);
    assert!(parse_paths("   ").is_empty());
}

#[test]
fn test_segment_kind_and_directive_flag() {
    assert_eq!(text("x").kind(), "text");
    assert!(!text("x").is_directive());
    assert_eq!(diff(None).kind(), "diff");
    assert!(context(&[]).is_directive());
}

#[test]
fn test_segments_serialize_with_type_tag() {
    let json = serde_json::to_string(&segment("hi<diff/>")).unwrap();
    assert_eq!(
        json,
        r#"[{"type":"text","content":"hi"},{"type":"diff_block","branch":null}]"#
    );
}
