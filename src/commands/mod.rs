//! Command implementations for promptbuddy.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the pieces every command shares: the resolved
//! workspace session and document input.

mod edit;
mod expand;
mod files;
mod segment;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::workspace;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Workspace root and its config, resolved once per invocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub root: PathBuf,
    pub config: Config,
}

impl Session {
    /// Resolve the root (see [`workspace::resolve_root`]) and load its config.
    pub fn open(root: Option<&Path>) -> Result<Self> {
        Self::at(workspace::resolve_root(root)?)
    }

    /// Load the config of an already known root.
    pub fn at(root: PathBuf) -> Result<Self> {
        let config = Config::load_from_workspace(&root)?;
        tracing::debug!(root = %root.display(), "workspace session");
        Ok(Self { root, config })
    }
}

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(cli: Cli) -> Result<()> {
    let session = Session::open(cli.root.as_deref())?;

    match cli.command {
        Command::Expand(args) => expand::cmd_expand(args, &session),
        Command::Segment(args) => segment::cmd_segment(args, &session),
        Command::Add(args) => edit::cmd_add(args, &session),
        Command::Remove(args) => edit::cmd_remove(args, &session),
        Command::Files => files::cmd_files(&session),
    }
}

/// Read a document from `file`, or from stdin when it is `None` or `-`.
pub(crate) fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| PromptError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(text)
        }
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        PromptError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
