//! Rendering of resolved directives and final assembly of the flattened text.

use regex::Regex;
use std::sync::LazyLock;

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"));

/// Placeholder for a diff with no output.
pub const NO_CHANGES: &str = "[No changes]";

/// Placeholder for a diff that could not be produced.
pub const DIFF_FAILED: &str = "[Failed to get diff]";

/// Placeholder for a context file that could not be read.
pub fn read_failed(path: &str) -> String {
    format!("[Failed to read: {}]", path)
}

/// A context file: its path line followed by a fenced code block.
pub fn file_block(path: &str, language: &str, content: &str) -> String {
    format!("{}\n```{}\n{}\n```", path, language, content.trim())
}

/// Diff output fenced as `diff`, or the no-changes placeholder.
pub fn diff_block(output: &str) -> String {
    let output = output.trim();
    if output.is_empty() {
        NO_CHANGES.to_string()
    } else {
        format!("```diff\n{}\n```", output)
    }
}

/// Join resolved segments with one blank line, dropping empty ones.
pub fn join_resolved<I>(parts: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let joined = parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    collapse_blank_lines(&joined)
}

/// Collapse every run of three or more newlines into exactly two.
///
/// Idempotent: the output never contains three consecutive newlines.
pub fn collapse_blank_lines(text: &str) -> String {
    EXCESS_NEWLINES.replace_all(text, "\n\n").into_owned()
}
