//! Parser module for extracting commands from source files
//!
//! This module provides language-specific extractors using tree-sitter to
//! turn function declarations into [`Command`] models.
//!
//! # Single source text
//!
//! - [`extract()`] - Extract commands from one Go source string
//! - [`Parser::extract()`] - Same, dispatched on [`Language`]
//!
//! # Multiple files
//!
//! - [`extract_files()`] - Read and extract a list of files
//! - [`extract_directory()`] - Discover Go files under a directory and extract them
//! - [`CommandSet`] - Result structure keeping each file's commands together
//!
//! Extraction is fail-fast: the first read or parse error aborts the call
//! and no partial results are returned. Directory walks are the exception
//! for individual entries: an unreadable entry is logged and skipped, but an
//! unreadable root is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::error::{Error, Result};

pub mod comment;
pub mod go;

pub use go::extract;

/// Supported source languages
pub enum Language {
    Go,
}

/// Extractor for building command models from source text
pub struct Parser;

impl Parser {
    /// Create a new parser instance
    pub fn new() -> Self {
        Parser
    }

    /// Extract commands from source text
    ///
    /// # Arguments
    /// * `file_name` - Name used in diagnostics only
    /// * `source` - The source text to parse
    /// * `lang` - The programming language of the source text
    pub fn extract(&self, file_name: &str, source: &str, lang: &Language) -> Result<Vec<Command>> {
        match lang {
            Language::Go => go::extract(file_name, source),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Commands extracted from one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCommands {
    /// Path the commands were read from
    pub path: PathBuf,
    /// Commands in source order
    pub commands: Vec<Command>,
}

/// Result of extracting commands from multiple files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSet {
    /// One entry per file, sorted by path
    pub files: Vec<FileCommands>,
}

impl CommandSet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over every command across all files
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.files.iter().flat_map(|file| file.commands.iter())
    }

    /// Total number of commands across all files
    pub fn command_count(&self) -> usize {
        self.files.iter().map(|file| file.commands.len()).sum()
    }

    /// Find the first command with the given name
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands().find(|command| command.name == name)
    }
}

/// Read and extract commands from multiple Go files
///
/// # Arguments
/// * `paths` - Slice of file paths to read
///
/// # Behavior
/// - Paths are sorted and deduplicated for deterministic output
/// - Each file's display path is used as the diagnostic file name
/// - The first unreadable or unparsable file aborts the whole call
///
/// # Example
/// ```no_run
/// use cligen_core::parser;
///
/// let files = vec![
///     std::path::Path::new("cmd/copy.go"),
///     std::path::Path::new("cmd/list.go"),
/// ];
///
/// let set = parser::extract_files(&files).unwrap();
/// println!("Extracted {} commands from {} files",
///          set.command_count(),
///          set.files.len());
/// ```
pub fn extract_files(paths: &[&Path]) -> Result<CommandSet> {
    let mut sorted_paths: Vec<&Path> = paths.to_vec();
    sorted_paths.sort();
    sorted_paths.dedup();

    let parser = Parser::new();
    let mut set = CommandSet::new();

    for path in sorted_paths {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let commands = parser.extract(&path.display().to_string(), &source, &Language::Go)?;
        tracing::debug!(path = %path.display(), commands = commands.len(), "extracted file");

        set.files.push(FileCommands {
            path: path.to_path_buf(),
            commands,
        });
    }

    Ok(set)
}

/// Extract commands from all Go files in a directory
///
/// Combines [`crate::discovery::discover_go_files`] with [`extract_files`].
///
/// # Errors
/// `Error::Io` if `root` cannot be resolved, otherwise as [`extract_files`].
///
/// # Example
/// ```no_run
/// use cligen_core::parser;
///
/// let set = parser::extract_directory(std::path::Path::new("cmd")).unwrap();
/// println!("Extracted {} commands", set.command_count());
/// ```
pub fn extract_directory(root: &Path) -> Result<CommandSet> {
    use crate::discovery;

    let root = root.canonicalize().map_err(|source| Error::Io {
        path: root.to_path_buf(),
        source,
    })?;
    let files = discovery::discover_go_files(&root);
    let file_refs: Vec<&Path> = files.iter().map(|p| p.as_path()).collect();

    extract_files(&file_refs)
}
