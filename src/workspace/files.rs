//! Candidate files for context blocks, filtered by `.gitignore`.

use crate::config::Config;
use crate::error::{PromptError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;

/// Always excluded, whatever `.gitignore` says.
const GIT_DIR_PATTERN: &str = "**/.git/**";

/// Convert `.gitignore` content into glob patterns.
///
/// Each line is trimmed; blank lines, comments and negations are dropped.
/// A leading `/` is removed and `**/` is prefixed so patterns match at any
/// depth. Patterns with a trailing `/`, or without a `.`, are treated as
/// directories and get `/**` appended. `**/.git/**` is always added.
pub fn gitignore_patterns(content: &str) -> Vec<String> {
    let mut patterns: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| !line.starts_with('!'))
        .map(convert_gitignore_line)
        .collect();
    patterns.push(GIT_DIR_PATTERN.to_string());
    patterns
}

fn convert_gitignore_line(line: &str) -> String {
    let line = line.strip_prefix('/').unwrap_or(line);
    let mut pattern = if line.starts_with("**/") {
        line.to_string()
    } else {
        format!("**/{}", line)
    };
    if let Some(dir) = pattern.strip_suffix('/') {
        pattern = format!("{}/**", dir.trim_end_matches('/'));
    } else if !pattern.ends_with("/**") && !pattern.contains('.') {
        pattern.push_str("/**");
    }
    pattern
}

/// Exclude patterns for `root`: converted `.gitignore` rules, or `fallback`
/// when the file is missing or unreadable.
pub fn exclude_patterns(root: &Path, fallback: &[String]) -> Vec<String> {
    let path = root.join(".gitignore");
    match fs::read_to_string(&path) {
        Ok(content) => gitignore_patterns(&content),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "using default excludes");
            fallback.to_vec()
        }
    }
}

/// Compiled exclude patterns.
///
/// Patterns ending in `/**` also prune whole directories during the walk, so
/// excluded trees like `node_modules` are never descended into.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    files: GlobSet,
    dirs: GlobSet,
}

impl ExcludeSet {
    /// Compile `patterns`, skipping invalid ones with a warning.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut files = GlobSetBuilder::new();
        let mut dirs = GlobSetBuilder::new();

        for pattern in patterns {
            let normalized = pattern.trim().replace('\\', "/");
            if normalized.is_empty() {
                continue;
            }
            let glob = match Glob::new(&normalized) {
                Ok(glob) => glob,
                Err(err) => {
                    tracing::warn!(pattern = %pattern, error = %err, "skipping invalid exclude pattern");
                    continue;
                }
            };
            files.add(glob);

            if let Some(dir) = normalized.strip_suffix("/**")
                && !dir.is_empty()
                && let Ok(dir_glob) = Glob::new(dir)
            {
                dirs.add(dir_glob);
            }
        }

        let build = |builder: GlobSetBuilder| {
            builder.build().map_err(|e| {
                PromptError::UserError(format!("failed to compile exclude patterns: {}", e))
            })
        };
        Ok(Self {
            files: build(files)?,
            dirs: build(dirs)?,
        })
    }

    pub fn excludes_file(&self, rel_path: &str) -> bool {
        self.files.is_match(rel_path)
    }

    pub fn excludes_dir(&self, rel_path: &str) -> bool {
        self.dirs.is_match(rel_path)
    }
}

/// Files under `root` eligible for inclusion: relative, forward slashes,
/// sorted. Symlinks are not followed.
pub fn list_candidate_files(root: &Path, config: &Config) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(PromptError::IoError(format!(
            "failed to list '{}': not a readable directory",
            root.display()
        )));
    }

    let patterns = exclude_patterns(root, &config.default_excludes);
    let excludes = ExcludeSet::new(&patterns)?;

    let prune = excludes.clone();
    let walk_root = root.to_path_buf();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            match relative_path(&walk_root, entry.path()) {
                Some(rel) if is_dir => !prune.excludes_dir(&rel),
                _ => true,
            }
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if let Some(rel) = relative_path(root, entry.path())
            && !excludes.excludes_file(&rel)
        {
            files.push(rel);
        }
    }
    files.sort();

    tracing::debug!(root = %root.display(), count = files.len(), "listed candidate files");
    Ok(files)
}

/// `path` relative to `root` with forward slashes; `None` for the root itself.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    if rel.as_os_str().is_empty() {
        return None;
    }
    Some(rel.to_string_lossy().replace('\\', "/"))
}
