//! Command model derived from function declarations
//!
//! These are plain value objects: the extractor builds them once and the
//! help renderer only reads them. `sub_commands` and `Flag::short_name` are
//! never filled in by the extractor; they exist so callers can compose a
//! command tree by hand.

use serde::{Deserialize, Serialize};

/// A positional argument, produced from one non-`bool` parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Parameter identifier (e.g., "src")
    pub name: String,
    /// Literal type spelling as written in source (e.g., "[]string", "...int")
    pub type_name: String,
    /// Trailing comment text, empty when absent
    #[serde(default)]
    pub description: String,
}

/// A boolean switch, produced from one `bool` parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Parameter identifier (e.g., "recursive")
    pub name: String,
    /// Optional one-character alias, rendered as `-r recursive`
    #[serde(default)]
    pub short_name: Option<char>,
    /// Trailing comment text, empty when absent
    #[serde(default)]
    pub description: String,
}

/// One invocable unit, produced from one top-level function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Function identifier, never empty
    pub name: String,
    /// Doc comment text, empty when absent
    #[serde(default)]
    pub description: String,
    /// Flags in declaration order
    #[serde(default)]
    pub flags: Vec<Flag>,
    /// Arguments in declaration order
    #[serde(default)]
    pub arguments: Vec<Argument>,
    /// Nested commands, only one level is rendered
    #[serde(default)]
    pub sub_commands: Vec<Command>,
}

impl Argument {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Flag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: None,
            description: String::new(),
        }
    }

    /// Attach a short alias
    pub fn with_short_name(mut self, short_name: char) -> Self {
        self.short_name = Some(short_name);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Command {
    /// Create a command with no description, flags, arguments or sub-commands
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            flags: Vec::new(),
            arguments: Vec::new(),
            sub_commands: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Append a nested command
    ///
    /// Used to compose a tree manually; the extractor always yields flat
    /// commands.
    pub fn with_sub_command(mut self, command: Command) -> Self {
        self.sub_commands.push(command);
        self
    }
}
