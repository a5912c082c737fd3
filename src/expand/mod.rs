//! Directive expansion: turns a segmented document into one flat prompt.
//!
//! Each segment resolves to a string:
//!
//! - text and notes are trimmed
//! - context blocks become one fenced code block per file, headed by its path
//! - diff tags become a ```` ```diff ```` block or `[No changes]`
//!
//! Failures are isolated. A file that cannot be read becomes
//! `[Failed to read: <path>]`, a failed diff becomes `[Failed to get diff]`,
//! and the notifier is told once per failure. The rest of the document is
//! still produced.
//!
//! Segments, and the paths within a context block, are resolved in parallel
//! on the rayon pool and gathered back in document order.

mod diff;
mod format;
mod language;
mod providers;


pub use diff::{CommandDiff, DEFAULT_DIFF_REF};
pub use format::{DIFF_FAILED, NO_CHANGES, collapse_blank_lines};
pub use language::ExtensionLanguages;
pub use providers::{
    DiffOutput, DiffRunner, FileReader, FixedWorkspace, FsReader, LanguageDetector, Notifier,
    StderrNotifier, WorkspaceResolver,
};

use crate::config::Config;
use crate::error::{ExpandError, Result};
use crate::segment::{Segment, TagSet, segment_with};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Resolves directives through a set of borrowed collaborators.
///
/// The expander holds no state of its own: every call re-reads files and
/// re-runs diffs.
#[derive(Clone, Copy)]
pub struct Expander<'a> {
    workspace: &'a dyn WorkspaceResolver,
    reader: &'a dyn FileReader,
    languages: &'a dyn LanguageDetector,
    diff: &'a dyn DiffRunner,
    notifier: &'a dyn Notifier,
}

impl<'a> Expander<'a> {
    pub fn new(
        workspace: &'a dyn WorkspaceResolver,
        reader: &'a dyn FileReader,
        languages: &'a dyn LanguageDetector,
        diff: &'a dyn DiffRunner,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            workspace,
            reader,
            languages,
            diff,
            notifier,
        }
    }

    /// Segment `text` with `tags` and expand the result.
    pub fn expand_text(&self, text: &str, tags: &TagSet) -> String {
        self.expand(&segment_with(text, tags))
    }

    /// Resolve every segment and join them into the flattened prompt.
    pub fn expand(&self, segments: &[Segment]) -> String {
        let root = self.workspace.workspace_root();
        tracing::debug!(
            segments = segments.len(),
            root = ?root,
            "expanding document"
        );

        let resolved: Vec<String> = segments
            .par_iter()
            .map(|segment| self.resolve(segment, root.as_deref()))
            .collect();

        format::join_resolved(resolved)
    }

    fn resolve(&self, segment: &Segment, root: Option<&Path>) -> String {
        match segment {
            Segment::Text { content } | Segment::Note { content } => content.trim().to_string(),
            Segment::ContextBlock { paths } => self.resolve_context(paths, root),
            Segment::DiffBlock { branch } => self.resolve_diff(branch.as_deref(), root),
        }
    }

    fn resolve_context(&self, paths: &[String], root: Option<&Path>) -> String {
        let blocks: Vec<String> = paths
            .par_iter()
            .map(|path| match self.read_context_file(path, root) {
                Ok(block) => block,
                Err(err) => {
                    tracing::debug!(path = %path, error = %err, "context file unavailable");
                    self.notifier
                        .notify(&format!("Failed to read file: {} ({})", path, err));
                    format::read_failed(path)
                }
            })
            .collect();

        blocks.join("\n\n")
    }

    fn read_context_file(
        &self,
        path: &str,
        root: Option<&Path>,
    ) -> std::result::Result<String, ExpandError> {
        let root = root.ok_or(ExpandError::MissingWorkspace)?;
        let bytes = self.reader.read(root, path)?;
        let content = String::from_utf8_lossy(&bytes);
        let language = self.languages.detect(path);
        tracing::debug!(
            path = %path,
            bytes = bytes.len(),
            language = %language,
            "inlined context file"
        );
        Ok(format::file_block(path, &language, &content))
    }

    fn resolve_diff(&self, branch: Option<&str>, root: Option<&Path>) -> String {
        let result = root
            .ok_or(ExpandError::MissingWorkspace)
            .and_then(|root| self.diff.diff(root, branch))
            .and_then(DiffOutput::into_result);

        match result {
            Ok(stdout) => {
                tracing::debug!(branch = ?branch, bytes = stdout.len(), "resolved diff");
                format::diff_block(&stdout)
            }
            Err(err) => {
                tracing::debug!(branch = ?branch, error = %err, "diff unavailable");
                self.notifier.notify(&format!("Failed to get diff: {}", err));
                DIFF_FAILED.to_string()
            }
        }
    }
}

/// The default collaborators: a fixed root, the local filesystem, the
/// extension language table, the configured diff command and stderr
/// notifications.
#[derive(Debug, Clone)]
pub struct StandardCollaborators {
    workspace: FixedWorkspace,
    reader: FsReader,
    languages: ExtensionLanguages,
    diff: CommandDiff,
    notifier: StderrNotifier,
}

impl StandardCollaborators {
    /// Build the collaborators for `root` from a validated config.
    pub fn from_config(config: &Config, root: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            workspace: FixedWorkspace::new(root),
            reader: FsReader,
            languages: ExtensionLanguages::with_overrides(config.normalized_languages()),
            diff: CommandDiff::from_config(config)?,
            notifier: StderrNotifier,
        })
    }

    /// An expander borrowing these collaborators.
    pub fn expander(&self) -> Expander<'_> {
        Expander::new(
            &self.workspace,
            &self.reader,
            &self.languages,
            &self.diff,
            &self.notifier,
        )
    }
}

/// Segment and expand `text` with the default collaborators for `root`.
pub fn expand_document(text: &str, config: &Config, root: Option<PathBuf>) -> Result<String> {
    let tags = config.tag_set()?;
    let collaborators = StandardCollaborators::from_config(config, root)?;
    Ok(collaborators.expander().expand_text(text, &tags))
}
