//! Diff runner that shells out to the configured diff command.

use super::providers::{DiffOutput, DiffRunner};
use crate::config::Config;
use crate::error::{ExpandError, Result};
use std::path::Path;
use std::process::Command;

/// Ref diffed against when a diff tag names no branch.
pub const DEFAULT_DIFF_REF: &str = "HEAD";

/// Runs `diff_command <ref>` in the workspace root (default `git diff HEAD`).
#[derive(Debug, Clone)]
pub struct CommandDiff {
    program: String,
    args: Vec<String>,
}

impl CommandDiff {
    /// Build a runner from an already split command line. An empty `argv`
    /// falls back to `git diff`.
    pub fn new(argv: Vec<String>) -> Self {
        let mut argv = argv.into_iter();
        match argv.next() {
            Some(program) => Self {
                program,
                args: argv.collect(),
            },
            None => Self::git(),
        }
    }

    /// Plain `git diff`.
    pub fn git() -> Self {
        Self {
            program: "git".to_string(),
            args: vec!["diff".to_string()],
        }
    }

    /// Build a runner from the config's `diff_command`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.diff_argv()?))
    }
}

impl Default for CommandDiff {
    fn default() -> Self {
        Self::git()
    }
}

impl DiffRunner for CommandDiff {
    fn diff(
        &self,
        root: &Path,
        branch: Option<&str>,
    ) -> std::result::Result<DiffOutput, ExpandError> {
        let target = branch.unwrap_or(DEFAULT_DIFF_REF);
        // Refs come from document text and must never reach the command as options.
        if target.starts_with('-') {
            return Err(ExpandError::DiffProcess(format!(
                "invalid ref '{}': refs must not start with '-'",
                target
            )));
        }

        let output = Command::new(&self.program)
            .current_dir(root)
            .args(&self.args)
            .arg(target)
            .output()
            .map_err(|e| {
                ExpandError::DiffProcess(format!("failed to execute {}: {}", self.program, e))
            })?;

        Ok(DiffOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
