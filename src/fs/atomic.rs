//! Crash-safe file replacement.
//!
//! Content goes to a sibling temporary file (`.{name}.{pid}.tmp`), is synced,
//! and is then renamed over the target. `std::fs::rename` replaces an
//! existing destination on both POSIX and Windows, so a reader sees either the
//! old document or the new one, never a truncated file.

use crate::error::{PromptError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`, creating parent directories.
///
/// # Example
///
/// ```no_run
/// use promptbuddy::fs::atomic_write;
///
/// atomic_write("prompt.md", b"<context>\nsrc/lib.rs\n</context>\n")?;
/// # Ok::<(), promptbuddy::error::PromptError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PromptError::IoError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_synced(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PromptError::IoError(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    // Persist the directory entry where the platform allows opening directories.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// [`atomic_write`] for text.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    atomic_write(path, text.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            PromptError::UserError(format!("invalid output path '{}'", target.display()))
        })?;
    let temp_name = format!(".{}.{}.tmp", name, std::process::id());
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_synced(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        PromptError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            PromptError::IoError(format!("failed to write '{}': {}", path.display(), e))
        })
}
