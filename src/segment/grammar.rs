//! Directive grammar: the set of recognized tag spellings compiled into a
//! single matcher.

use super::types::Segment;
use crate::error::{PromptError, Result};
use regex::{Captures, Regex};

/// Default spellings for context blocks.
pub const DEFAULT_CONTEXT_TAGS: [&str; 2] = ["context", "pb-context"];

/// Default spellings for diff tags.
pub const DEFAULT_DIFF_TAGS: [&str; 1] = ["diff"];

/// Default spellings for note blocks.
pub const DEFAULT_NOTE_TAGS: [&str; 1] = ["pb-note"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectiveKind {
    Context,
    Diff,
    Note,
}

/// One alternative of the combined pattern and the capture groups it owns.
#[derive(Debug, Clone)]
struct Alternative {
    kind: DirectiveKind,
    tag: String,
    /// Inner text for blocks, whole tag for diffs.
    group: String,
    /// Branch attribute group, diffs only.
    branch_group: Option<String>,
}

/// Recognized directive tag spellings.
///
/// Each kind may have several spellings (e.g. `context` and the legacy
/// `pb-context`). All spellings are compiled into one regex so a document is
/// scanned once, left to right.
#[derive(Debug, Clone)]
pub struct TagSet {
    context: Vec<String>,
    diff: Vec<String>,
    note: Vec<String>,
    alternatives: Vec<Alternative>,
    pattern: Regex,
}

impl TagSet {
    /// Build a tag set from the given spellings.
    ///
    /// # Returns
    ///
    /// * `Ok(TagSet)` - The compiled tag set
    /// * `Err(PromptError::UserError)` - If a spelling is empty or not a valid
    ///   tag name, is listed under two kinds, or no spelling is given at all
    pub fn new<S: AsRef<str>>(context: &[S], diff: &[S], note: &[S]) -> Result<Self> {
        let context: Vec<String> = context.iter().map(|s| s.as_ref().to_string()).collect();
        let diff: Vec<String> = diff.iter().map(|s| s.as_ref().to_string()).collect();
        let note: Vec<String> = note.iter().map(|s| s.as_ref().to_string()).collect();

        if context.is_empty() && diff.is_empty() && note.is_empty() {
            return Err(PromptError::UserError(
                "at least one directive tag spelling must be configured".to_string(),
            ));
        }

        let mut seen: Vec<&str> = Vec::new();
        for tag in context.iter().chain(&diff).chain(&note) {
            validate_tag_name(tag)?;
            if seen.contains(&tag.as_str()) {
                return Err(PromptError::UserError(format!(
                    "tag '{}' is configured more than once",
                    tag
                )));
            }
            seen.push(tag);
        }

        let mut alternatives = Vec::new();
        let mut branches = Vec::new();
        for (i, tag) in context.iter().enumerate() {
            let group = format!("context{}", i);
            branches.push(block_pattern(tag, &group));
            alternatives.push(Alternative {
                kind: DirectiveKind::Context,
                tag: tag.clone(),
                group,
                branch_group: None,
            });
        }
        for (i, tag) in note.iter().enumerate() {
            let group = format!("note{}", i);
            branches.push(block_pattern(tag, &group));
            alternatives.push(Alternative {
                kind: DirectiveKind::Note,
                tag: tag.clone(),
                group,
                branch_group: None,
            });
        }
        for (i, tag) in diff.iter().enumerate() {
            let group = format!("diff{}", i);
            let branch_group = format!("branch{}", i);
            branches.push(format!(
                r#"(?P<{group}><{tag}(?:\s+branch="(?P<{branch}>[^"]*)")?\s*/>)"#,
                group = group,
                tag = regex::escape(tag),
                branch = branch_group
            ));
            alternatives.push(Alternative {
                kind: DirectiveKind::Diff,
                tag: tag.clone(),
                group,
                branch_group: Some(branch_group),
            });
        }

        let pattern = Regex::new(&branches.join("|")).map_err(|e| {
            PromptError::UserError(format!("failed to compile directive grammar: {}", e))
        })?;

        Ok(Self {
            context,
            diff,
            note,
            alternatives,
            pattern,
        })
    }

    /// Spellings accepted for context blocks.
    pub fn context_tags(&self) -> &[String] {
        &self.context
    }

    /// Spellings accepted for diff tags.
    pub fn diff_tags(&self) -> &[String] {
        &self.diff
    }

    /// Spellings accepted for note blocks.
    pub fn note_tags(&self) -> &[String] {
        &self.note
    }

    /// The spelling used when a new context block has to be written.
    pub fn primary_context_tag(&self) -> Option<&str> {
        self.context.first().map(String::as_str)
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Turn a match of the combined pattern into a segment and its tag.
    pub(crate) fn classify(&self, caps: &Captures<'_>) -> Option<(Segment, String)> {
        for alt in &self.alternatives {
            let Some(m) = caps.name(&alt.group) else {
                continue;
            };
            let segment = match alt.kind {
                DirectiveKind::Context => Segment::ContextBlock {
                    paths: parse_paths(m.as_str()),
                },
                DirectiveKind::Note => Segment::Note {
                    content: m.as_str().trim().to_string(),
                },
                DirectiveKind::Diff => Segment::DiffBlock {
                    branch: alt
                        .branch_group
                        .as_deref()
                        .and_then(|g| caps.name(g))
                        .map(|b| b.as_str().to_string())
                        .filter(|b| !b.is_empty()),
                },
            };
            return Some((segment, alt.tag.clone()));
        }
        None
    }
}

impl Default for TagSet {
    fn default() -> Self {
        Self::new(&DEFAULT_CONTEXT_TAGS, &DEFAULT_DIFF_TAGS, &DEFAULT_NOTE_TAGS)
            .expect("Invalid default directive grammar")
    }
}

/// Paired open/close block; the first closing delimiter ends it.
fn block_pattern(tag: &str, group: &str) -> String {
    let tag = regex::escape(tag);
    format!(r"<{tag}>(?P<{group}>(?s:.*?))</{tag}>", tag = tag, group = group)
}

/// Split a context block's inner text into paths: one per non-blank line.
pub(crate) fn parse_paths(inner: &str) -> Vec<String> {
    inner
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate_tag_name(tag: &str) -> Result<()> {
    let mut chars = tag.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic()
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(PromptError::UserError(format!(
            "invalid directive tag name '{}': must start with a letter and contain only letters, digits, '-', '_', '.' or ':'",
            tag
        )))
    }
}
