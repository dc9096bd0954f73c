//! cligen core library
//!
//! This library derives command-line interface descriptions from Go
//! function declarations and renders them as help text.
//!
//! ```
//! let source = "package s\n// Copy files and directories.\nfunc Copy(src string, dst string, recursive bool) error {return nil}";
//!
//! let commands = cligen_core::extract("copy.go", source).unwrap();
//! let help = commands[0].help().unwrap();
//!
//! assert!(help.contains("Copy: Copy files and directories."));
//! assert!(help.contains("Copy [flags] src dst"));
//! ```

pub mod command;
pub mod discovery;
pub mod error;
mod help;
pub mod parser;

// Re-export commonly used types
pub use command::{Argument, Command, Flag};
pub use error::{Error, Result};
pub use parser::{extract, CommandSet, FileCommands};
