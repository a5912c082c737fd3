//! Workspace root resolution and the listing of files eligible for context
//! blocks.
//!
//! The root is `--root` when given, otherwise the git repository containing
//! the current directory, otherwise the current directory itself.

mod files;

#[cfg(test)]
mod tests;

pub use files::{ExcludeSet, exclude_patterns, gitignore_patterns, list_candidate_files};

use crate::error::{PromptError, Result};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Resolve the workspace root from the current directory.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| {
        PromptError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    resolve_root_from(explicit, &cwd)
}

/// Resolve the workspace root as if invoked from `cwd`.
pub fn resolve_root_from(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    if let Some(root) = explicit {
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            cwd.join(root)
        };
        if !root.is_dir() {
            return Err(PromptError::UserError(format!(
                "workspace root '{}' is not a directory",
                root.display()
            )));
        }
        return Ok(root);
    }

    match git::get_repo_root(cwd) {
        Ok(root) => Ok(root),
        Err(err) => {
            tracing::debug!(cwd = %cwd.display(), error = %err, "not in a git repository, using cwd");
            Ok(cwd.to_path_buf())
        }
    }
}
