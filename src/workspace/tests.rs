//! Tests for workspace resolution and file listing.

use super::*;
use crate::config::Config;
use crate::test_support::{DirGuard, create_test_repo};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_gitignore_conversion() {
    let content = "\
# build output
/target
node_modules/
*.log
  dist  

!keep.log
**/cache/**
.venv/
";
    assert_eq!(
        gitignore_patterns(content),
        vec![
            "**/target/**",
            "**/node_modules/**",
            "**/*.log",
            "**/dist/**",
            "**/cache/**",
            "**/.venv/**",
            "**/.git/**",
        ]
    );
}

#[test]
fn test_gitignore_empty_still_excludes_git_dir() {
    assert_eq!(gitignore_patterns(""), vec!["**/.git/**"]);
    assert_eq!(gitignore_patterns("# only comments\n\n"), vec!["**/.git/**"]);
}

#[test]
fn test_gitignore_dotted_names_are_not_directories() {
    assert_eq!(
        gitignore_patterns(".DS_Store\nconfig.local.yaml"),
        vec!["**/.DS_Store", "**/config.local.yaml", "**/.git/**"]
    );
}

#[test]
fn test_exclude_patterns_fall_back_without_gitignore() {
    let temp_dir = TempDir::new().unwrap();
    let fallback = vec!["**/vendor/**".to_string()];
    assert_eq!(exclude_patterns(temp_dir.path(), &fallback), fallback);

    write(temp_dir.path(), ".gitignore", "out\n");
    assert_eq!(
        exclude_patterns(temp_dir.path(), &fallback),
        vec!["**/out/**", "**/.git/**"]
    );
}

#[test]
fn test_exclude_set_skips_invalid_patterns() {
    let set = ExcludeSet::new(&[
        "**/[unclosed".to_string(),
        "**/*.log".to_string(),
        "  ".to_string(),
    ])
    .unwrap();
    assert!(set.excludes_file("a/b/run.log"));
    assert!(!set.excludes_file("src/main.rs"));
}

#[test]
fn test_exclude_set_prunes_directory_patterns() {
    let set = ExcludeSet::new(&["**/node_modules/**".to_string(), "**/*.tmp".to_string()])
        .unwrap();
    assert!(set.excludes_dir("node_modules"));
    assert!(set.excludes_dir("web/node_modules"));
    assert!(!set.excludes_dir("src"));
    assert!(set.excludes_file("web/node_modules/react/index.js"));
    assert!(set.excludes_file("x.tmp"));
}

#[test]
fn test_list_candidate_files_respects_gitignore() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, ".gitignore", "target/\n*.log\n");
    write(root, "src/main.rs", "fn main() {}");
    write(root, "src/nested/mod.rs", "");
    write(root, "README.md", "# hi");
    write(root, "target/debug/app", "bin");
    write(root, "logs/run.log", "x");
    write(root, ".git/HEAD", "ref: refs/heads/main");

    let files = list_candidate_files(root, &Config::default()).unwrap();
    assert_eq!(
        files,
        vec![".gitignore", "README.md", "src/main.rs", "src/nested/mod.rs"]
    );
}

#[test]
fn test_list_candidate_files_uses_default_excludes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "index.js", "");
    write(root, "node_modules/pkg/index.js", "");
    write(root, "dist/bundle.js", "");
    write(root, "docs/.DS_Store", "");

    let files = list_candidate_files(root, &Config::default()).unwrap();
    assert_eq!(files, vec!["index.js"]);
}

#[test]
fn test_list_candidate_files_missing_root_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = list_candidate_files(&temp_dir.path().join("missing"), &Config::default())
        .unwrap_err();
    assert!(matches!(err, PromptError::IoError(_)));
}

#[cfg(unix)]
#[test]
fn test_list_candidate_files_skips_symlinks() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "real.rs", "");
    std::os::unix::fs::symlink(root.join("real.rs"), root.join("link.rs")).unwrap();

    let files = list_candidate_files(root, &Config::default()).unwrap();
    assert_eq!(files, vec!["real.rs"]);
}

#[test]
fn test_explicit_root_wins() {
    let repo = create_test_repo();
    let other = TempDir::new().unwrap();
    let root = resolve_root_from(Some(other.path()), repo.path()).unwrap();
    assert_eq!(root, other.path());
}

#[test]
fn test_relative_explicit_root_is_joined_to_cwd() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("docs")).unwrap();
    let root = resolve_root_from(Some(Path::new("docs")), temp_dir.path()).unwrap();
    assert_eq!(root, temp_dir.path().join("docs"));
}

#[test]
fn test_explicit_root_must_be_directory() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "file.txt", "");

    let file = temp_dir.path().join("file.txt");
    let err = resolve_root_from(Some(&file), temp_dir.path()).unwrap_err();
    assert!(matches!(err, PromptError::UserError(_)));

    let missing = temp_dir.path().join("nope");
    assert!(resolve_root_from(Some(&missing), temp_dir.path()).is_err());
}

#[test]
fn test_repository_root_from_subdirectory() {
    let repo = create_test_repo();
    let nested = repo.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let root = resolve_root_from(None, &nested).unwrap();
    assert_eq!(
        root.canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}

#[test]
fn test_outside_repository_uses_cwd() {
    let temp_dir = TempDir::new().unwrap();
    let root = resolve_root_from(None, temp_dir.path()).unwrap();
    assert_eq!(root, temp_dir.path());
}

#[test]
#[serial]
fn test_resolve_root_from_current_directory() {
    let repo = create_test_repo();
    let nested = repo.path().join("docs");
    fs::create_dir(&nested).unwrap();
    let _guard = DirGuard::new(&nested);

    let root = resolve_root(None).unwrap();
    assert_eq!(
        root.canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}

#[test]
fn test_list_candidate_files_uses_converted_patterns_only() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    // Negations are dropped, so keep.log stays excluded by `*.log`.
    write(root, ".gitignore", "*.log\n!keep.log\n");
    write(root, "keep.log", "");
    write(root, ".env", "SECRET=1");
    write(root, "nested/.gitignore", "*.rs\n");
    write(root, "nested/lib.rs", "");

    let files = list_candidate_files(root, &Config::default()).unwrap();
    assert_eq!(
        files,
        vec![".env", ".gitignore", "nested/.gitignore", "nested/lib.rs"]
    );
}

#[test]
fn test_list_candidate_files_prunes_only_matching_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, ".gitignore", "build\n");
    write(root, "build/out.o", "");
    write(root, "tools/build/script.sh", "");
    write(root, "tools/builder.rs", "");

    let files = list_candidate_files(root, &Config::default()).unwrap();
    assert_eq!(files, vec![".gitignore", "tools/builder.rs"]);
}
