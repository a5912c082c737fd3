//! Implementation of the `promptbuddy expand` command.

use super::{Session, read_document};
use crate::cli::ExpandArgs;
use crate::error::Result;
use crate::expand::expand_document;
use crate::fs::write_text;

/// Execute the `promptbuddy expand` command.
///
/// Expansion failures inside the document become placeholders and warnings;
/// only unreadable input, bad config or a failed output write are errors.
pub fn cmd_expand(args: ExpandArgs, session: &Session) -> Result<()> {
    let text = read_document(args.file.as_deref())?;
    let prompt = expand_document(&text, &session.config, Some(session.root.clone()))?;

    match args.output {
        Some(path) => {
            write_text(&path, &prompt)?;
            eprintln!("Wrote {} bytes to {}", prompt.len(), path.display());
        }
        None => println!("{}", prompt),
    }
    Ok(())
}
