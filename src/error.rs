//! Error types for promptbuddy.
//!
//! `PromptError` covers failures that abort a command. `ExpandError` covers
//! per-directive failures, which the expander recovers locally and renders
//! as inline placeholders.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptbuddy commands.
#[derive(Error, Debug)]
pub enum PromptError {
    /// User provided invalid arguments or input could not be read.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// A file could not be written.
    #[error("I/O failure: {0}")]
    IoError(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::GitError(_) => exit_codes::GIT_FAILURE,
            PromptError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for promptbuddy operations.
pub type Result<T> = std::result::Result<T, PromptError>;

/// Failure while resolving a single directive.
///
/// These never abort an expansion; the expander notifies the user once and
/// substitutes a placeholder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// No workspace root is configured for this expansion pass.
    #[error("no workspace folder found")]
    MissingWorkspace,

    /// The referenced file does not exist under the workspace root.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// The referenced file exists but could not be read.
    #[error("failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    /// The diff process could not be spawned or exited with an error status.
    #[error("diff failed: {0}")]
    DiffProcess(String),
}
