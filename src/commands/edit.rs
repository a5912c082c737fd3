//! Implementation of the `promptbuddy add` and `promptbuddy remove` commands.

use super::{Session, read_file};
use crate::cli::EditArgs;
use crate::document::VersionedDocument;
use crate::error::Result;
use crate::fs::write_text;
use crate::segment::TagSet;

/// Execute the `promptbuddy add` command.
///
/// Paths that do not exist under the workspace root are still added, with a
/// warning, since the file may be created later.
pub fn cmd_add(args: EditArgs, session: &Session) -> Result<()> {
    for path in &args.paths {
        if !session.root.join(path.trim()).is_file() {
            tracing::warn!(
                path = %path,
                root = %session.root.display(),
                "path is not a file in the workspace"
            );
        }
    }
    edit_document(&args, session, |doc, tags, paths| doc.add_paths(tags, paths))
}

/// Execute the `promptbuddy remove` command.
pub fn cmd_remove(args: EditArgs, session: &Session) -> Result<()> {
    edit_document(&args, session, |doc, tags, paths| doc.remove_paths(tags, paths))
}

fn edit_document<F>(args: &EditArgs, session: &Session, apply: F) -> Result<()>
where
    F: FnOnce(&mut VersionedDocument, &TagSet, &[String]) -> bool,
{
    let tags = session.config.tag_set()?;
    let mut doc = VersionedDocument::new(read_file(&args.file)?);

    if !apply(&mut doc, &tags, &args.paths) {
        println!("No changes to {}", args.file.display());
        return Ok(());
    }

    write_text(&args.file, doc.text())?;
    println!("Updated {}", args.file.display());
    for path in doc.context_paths(&tags) {
        println!("  {}", path);
    }
    Ok(())
}
