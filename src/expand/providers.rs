//! Collaborator interfaces consulted while resolving directives, with the
//! default filesystem-backed implementations.
//!
//! Every trait requires `Sync`: segments and paths are resolved on the rayon
//! pool and share the same collaborators.

use crate::error::ExpandError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves the single workspace root that relative paths are read from.
pub trait WorkspaceResolver: Sync {
    /// The active root, or `None` when no workspace is configured.
    fn workspace_root(&self) -> Option<PathBuf>;
}

/// Reads context files relative to the workspace root.
pub trait FileReader: Sync {
    fn read(&self, root: &Path, path: &str) -> Result<Vec<u8>, ExpandError>;
}

/// Maps a path to the language tag of its code fence.
pub trait LanguageDetector: Sync {
    /// Short identifier such as `python`, or an empty string when unknown.
    fn detect(&self, path: &str) -> String;
}

/// Raw outcome of a diff process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl DiffOutput {
    /// Interpret the exit status.
    ///
    /// Exit code `1` is how diff tools report "differences found", so both
    /// `0` and `1` yield the captured stdout.
    pub fn into_result(self) -> Result<String, ExpandError> {
        match self.exit_code {
            Some(0) | Some(1) => Ok(self.stdout),
            Some(code) => Err(ExpandError::DiffProcess(format!(
                "exit code {}: {}",
                code,
                self.stderr.trim()
            ))),
            None => Err(ExpandError::DiffProcess(
                "diff process terminated by signal".to_string(),
            )),
        }
    }
}

/// Runs a version-control diff in the workspace root.
pub trait DiffRunner: Sync {
    /// Diff the working tree against `branch`, or against `HEAD` when `None`.
    ///
    /// Returns `Err` only when the process could not be run at all; exit
    /// statuses are interpreted by the caller.
    fn diff(&self, root: &Path, branch: Option<&str>) -> Result<DiffOutput, ExpandError>;
}

/// Receives one non-fatal message per failed directive.
pub trait Notifier: Sync {
    fn notify(&self, message: &str);
}

/// Workspace root supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct FixedWorkspace {
    root: Option<PathBuf>,
}

impl FixedWorkspace {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

impl WorkspaceResolver for FixedWorkspace {
    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
}

/// Reads files straight from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, root: &Path, path: &str) -> Result<Vec<u8>, ExpandError> {
        std::fs::read(root.join(path)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExpandError::FileNotFound {
                path: path.to_string(),
            },
            _ => ExpandError::FileRead {
                path: path.to_string(),
                message: e.to_string(),
            },
        })
    }
}

/// Prints notifications to stderr so stdout stays the flattened prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }
}
