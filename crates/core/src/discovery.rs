//! File discovery module with gitignore-aware filtering
//!
//! Finds source files under a directory while respecting .gitignore
//! patterns. [`discover_files`] is language-agnostic and works with any glob
//! patterns; [`discover_go_files`] is the Go convenience wrapper used by
//! [`crate::parser::extract_directory`].

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Suffix of Go test files, which never describe commands
const GO_TEST_SUFFIX: &str = "_test.go";

/// Discover files matching glob patterns in a project directory
///
/// # Arguments
/// * `root` - Root directory to search
/// * `patterns` - Glob patterns relative to `root` (e.g., &["**/*.go", "cmd/**/*.go"])
///
/// # Returns
/// Absolute paths of matching files, sorted, excluding those matched by .gitignore.
/// An unreadable root or an invalid pattern yields an empty list.
///
/// # Example
/// ```no_run
/// use cligen_core::discovery;
///
/// let files = discovery::discover_files(std::path::Path::new("my_project"), &["cmd/**/*.go"]);
/// println!("Found {} files", files.len());
/// ```
pub fn discover_files(root: &Path, patterns: &[&str]) -> Vec<PathBuf> {
    let canonical_root = match root.canonicalize() {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(root = %root.display(), error = %err, "cannot resolve discovery root");
            return Vec::new();
        }
    };

    let glob_matcher = match build_glob_matcher(patterns) {
        Ok(matcher) => matcher,
        Err(err) => {
            tracing::warn!(error = %err, "invalid discovery pattern");
            return Vec::new();
        }
    };

    let mut files = Vec::new();

    for result in build_walker(&canonical_root) {
        match result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                // Patterns are matched against the path relative to the root
                if let Ok(rel_path) = entry.path().strip_prefix(&canonical_root) {
                    if glob_matcher.is_match(rel_path) {
                        files.push(entry.into_path());
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "error walking directory");
            }
        }
    }

    files.sort();
    files
}

/// Discover Go source files in a project directory
///
/// `_test.go` files are skipped.
///
/// # Example
/// ```no_run
/// use cligen_core::discovery;
///
/// let files = discovery::discover_go_files(std::path::Path::new("my_project"));
/// println!("Found {} Go files", files.len());
/// ```
pub fn discover_go_files(root: &Path) -> Vec<PathBuf> {
    discover_files(root, &["**/*.go"])
        .into_iter()
        .filter(|path| {
            !path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(GO_TEST_SUFFIX))
        })
        .collect()
}

/// Build a glob matcher from the provided patterns
fn build_glob_matcher(patterns: &[&str]) -> Result<globset::GlobSet, globset::Error> {
    use globset::GlobSetBuilder;

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(globset::Glob::new(pattern)?);
    }
    builder.build()
}

/// Build a walker honouring .gitignore in the root and its parents
fn build_walker(root: &Path) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .git_ignore(true)
        .git_exclude(true)
        .hidden(false)
        .parents(true);

    // WalkBuilder only reads .gitignore inside a git repository; add it
    // explicitly so plain directories are filtered too
    let gitignore_path = root.join(".gitignore");
    if gitignore_path.exists() {
        if let Some(err) = builder.add_ignore(&gitignore_path) {
            tracing::warn!(path = %gitignore_path.display(), error = %err, "cannot read .gitignore");
        }
    }

    builder.build()
}
