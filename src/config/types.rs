//! Configuration constants and defaults for promptbuddy.

use crate::segment::{DEFAULT_CONTEXT_TAGS, DEFAULT_DIFF_TAGS, DEFAULT_NOTE_TAGS};

/// Name of the optional config file at the workspace root.
pub const CONFIG_FILE_NAME: &str = ".promptbuddy.yaml";

/// Exclude globs used by `files` when the workspace has no readable `.gitignore`.
pub fn default_excludes() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/dist/**".to_string(),
        "**/build/**".to_string(),
        "**/.DS_Store".to_string(),
        "**/coverage/**".to_string(),
    ]
}

// Default value functions for serde
pub(crate) fn default_context_tags() -> Vec<String> {
    DEFAULT_CONTEXT_TAGS.iter().map(|s| s.to_string()).collect()
}
pub(crate) fn default_diff_tags() -> Vec<String> {
    DEFAULT_DIFF_TAGS.iter().map(|s| s.to_string()).collect()
}
pub(crate) fn default_note_tags() -> Vec<String> {
    DEFAULT_NOTE_TAGS.iter().map(|s| s.to_string()).collect()
}
pub(crate) fn default_diff_command() -> String {
    "git diff".to_string()
}
