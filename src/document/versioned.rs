use super::edit;
use crate::segment::{Segment, TagSet, segment_with};

/// Document text paired with a monotonically increasing version.
///
/// Local edits bump the version. An update from another writer carries the
/// version it was based on and is applied only when that version is newer,
/// so a stale copy can never overwrite a later edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionedDocument {
    text: String,
    version: u64,
}

impl VersionedDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            version: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Replace the text locally. Returns whether anything changed; the
    /// version is bumped only then.
    pub fn edit(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        self.version += 1;
        true
    }

    /// Apply an update made elsewhere at `version`. Stale or equal versions
    /// are rejected and leave the document untouched.
    pub fn apply_external(&mut self, text: impl Into<String>, version: u64) -> bool {
        if version <= self.version {
            tracing::debug!(
                current = self.version,
                incoming = version,
                "rejected stale document update"
            );
            return false;
        }
        self.text = text.into();
        self.version = version;
        true
    }

    pub fn add_paths(&mut self, tags: &TagSet, paths: &[String]) -> bool {
        let updated = edit::add_paths(&self.text, tags, paths);
        self.edit(updated)
    }

    pub fn remove_paths(&mut self, tags: &TagSet, paths: &[String]) -> bool {
        let updated = edit::remove_paths(&self.text, tags, paths);
        self.edit(updated)
    }

    pub fn context_paths(&self, tags: &TagSet) -> Vec<String> {
        edit::context_paths(&self.text, tags)
    }

    pub fn segments(&self, tags: &TagSet) -> Vec<Segment> {
        segment_with(&self.text, tags)
    }
}
