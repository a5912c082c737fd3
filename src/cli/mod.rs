//! CLI argument parsing for promptbuddy.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptbuddy: flatten prompt documents for language models.
///
/// A prompt document is plain text with directives:
/// - `<context>` blocks list workspace files to inline as code fences
/// - `<diff/>` (or `<diff branch="main"/>`) inlines the working tree diff
/// - `<pb-note>` blocks are kept as plain text
#[derive(Parser, Debug)]
#[command(name = "promptbuddy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root. Defaults to the enclosing git repository, or the
    /// current directory outside one.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptbuddy.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand a document into a flat prompt.
    ///
    /// Reads stdin when FILE is omitted or `-`, and prints to stdout unless
    /// `--output` is given.
    Expand(ExpandArgs),

    /// Show how a document splits into text and directives.
    Segment(SegmentArgs),

    /// Add paths to the first context block of a document.
    ///
    /// Creates a context block at the end when the document has none.
    Add(EditArgs),

    /// Remove paths from the first context block of a document.
    Remove(EditArgs),

    /// List workspace files that can be added to a context block.
    ///
    /// Paths are relative to the workspace root and filtered by `.gitignore`.
    Files,
}

/// Arguments for the `expand` command.
#[derive(Parser, Debug)]
pub struct ExpandArgs {
    /// Document to expand (`-` for stdin).
    pub file: Option<PathBuf>,

    /// Write the prompt to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `segment` command.
#[derive(Parser, Debug)]
pub struct SegmentArgs {
    /// Document to segment (`-` for stdin).
    pub file: Option<PathBuf>,

    /// Print segments as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` and `remove` commands.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Document to edit in place.
    pub file: PathBuf,

    /// Workspace-relative paths.
    #[arg(required = true)]
    pub paths: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
