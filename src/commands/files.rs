//! Implementation of the `promptbuddy files` command.

use super::Session;
use crate::error::Result;
use crate::workspace::list_candidate_files;

/// Execute the `promptbuddy files` command.
pub fn cmd_files(session: &Session) -> Result<()> {
    for path in list_candidate_files(&session.root, &session.config)? {
        println!("{}", path);
    }
    Ok(())
}
