//! Error types for extraction and help rendering

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Every way extraction or rendering can fail
///
/// `Parse` means the whole file is unusable, `Declaration` means one
/// function could not be turned into a command. Both abort extraction.
#[derive(Debug, Error)]
pub enum Error {
    #[error("parsing go file \"{file}\": {line}:{column}: {message}")]
    Parse {
        file: String,
        /// 1-based line of the first syntax problem
        line: usize,
        /// 1-based column of the first syntax problem
        column: usize,
        message: String,
    },

    #[error("parsing func {function}: {reason}")]
    Declaration { function: String, reason: String },

    #[error("rendering help template: {0}")]
    Template(#[from] liquid::Error),

    #[error("loading go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = Error::Parse {
            file: "test.go".to_string(),
            line: 3,
            column: 7,
            message: "unexpected `)`".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "parsing go file \"test.go\": 3:7: unexpected `)`"
        );
    }

    #[test]
    fn test_declaration_error_message() {
        let err = Error::Declaration {
            function: "Copy".to_string(),
            reason: "parameter type outside source".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "parsing func Copy: parameter type outside source"
        );
    }
}
