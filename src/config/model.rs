//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Configuration for prompt expansion.
///
/// This struct represents the contents of `.promptbuddy.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Directive grammar
    // =========================================================================
    /// Spellings accepted for context blocks (first one is used for new blocks).
    #[serde(default = "default_context_tags")]
    pub context_tags: Vec<String>,

    /// Spellings accepted for self-closing diff tags.
    #[serde(default = "default_diff_tags")]
    pub diff_tags: Vec<String>,

    /// Spellings accepted for note blocks.
    #[serde(default = "default_note_tags")]
    pub note_tags: Vec<String>,

    // =========================================================================
    // Expansion settings
    // =========================================================================
    /// Command run in the workspace root for diff directives. The branch
    /// (or `HEAD`) is appended as the last argument.
    #[serde(default = "default_diff_command")]
    pub diff_command: String,

    /// Extension (no leading dot) to code-fence language overrides.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    // =========================================================================
    // File listing
    // =========================================================================
    /// Exclude globs for `files` when no `.gitignore` can be read.
    #[serde(default = "default_excludes")]
    pub default_excludes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_tags: default_context_tags(),
            diff_tags: default_diff_tags(),
            note_tags: default_note_tags(),
            diff_command: default_diff_command(),
            languages: BTreeMap::new(),
            default_excludes: default_excludes(),
        }
    }
}
