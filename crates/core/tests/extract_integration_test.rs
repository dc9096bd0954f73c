//! Integration tests for command extraction
//!
//! These tests use the fixtures at `tests/test-fixtures/` to exercise the
//! public API end to end: file discovery, extraction and help rendering.

use cligen_core::{discovery, parser, Argument, Error, Flag};
use std::path::Path;

#[test]
fn test_copy_fixture_end_to_end() {
    let path = Path::new("tests/test-fixtures/copy.go");
    let set = parser::extract_files(&[path]).unwrap();

    assert_eq!(set.command_count(), 1);
    let copy = set.find("Copy").unwrap();

    assert_eq!(copy.description, "Copy files and directories.");
    assert_eq!(
        copy.arguments,
        vec![Argument::new("src", "string"), Argument::new("dst", "string")]
    );
    assert_eq!(copy.flags, vec![Flag::new("recursive")]);

    let help = copy.help().unwrap();
    assert!(help.contains("Copy: Copy files and directories.\n"));
    assert!(help.contains("Copy [flags] src dst\n"));
    assert!(help.contains("Options:\n  -recursive\t"));
    assert!(!help.contains("Commands:"));
}

#[test]
fn test_fileutil_fixture_commands() {
    let source = std::fs::read_to_string("tests/test-fixtures/fileutil/fileutil.go").unwrap();
    let commands = cligen_core::extract("fileutil.go", &source).unwrap();

    // Walk and Root are methods
    let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["List", "Touch", "Remove"]);

    let list = &commands[0];
    assert_eq!(
        list.description,
        "List prints the entries of a directory.\n\nHidden entries are skipped unless all is set."
    );
    assert_eq!(
        list.arguments,
        vec![
            Argument::new("dir", "string").with_description("directory to list"),
            Argument::new("mode", "fs.FileMode"),
        ]
    );
    assert_eq!(
        list.flags,
        vec![
            Flag::new("all").with_description("listing switches"),
            Flag::new("long").with_description("listing switches"),
        ]
    );

    let touch = &commands[1];
    assert_eq!(touch.description, "");
    assert_eq!(touch.arguments, vec![Argument::new("paths", "...string")]);

    let remove = &commands[2];
    assert_eq!(remove.description, "Remove deletes a file.");
    assert_eq!(
        remove.flags,
        vec![Flag::new("force").with_description("ignore missing files")]
    );
}

#[test]
fn test_fileutil_directory_extraction() {
    let root = Path::new("tests/test-fixtures/fileutil");
    let files = discovery::discover_go_files(root);

    // fileutil.go and internal/stat.go; the test file and vendor/ are skipped
    assert_eq!(files.len(), 2, "found {:?}", files);
    assert!(files.iter().all(|p| p.is_absolute()));

    let set = parser::extract_directory(root).unwrap();
    assert_eq!(set.files.len(), 2);
    assert_eq!(set.command_count(), 4);

    let stat = set.find("Stat").unwrap();
    assert_eq!(stat.description, "Stat shows file metadata.");
    assert_eq!(stat.flags, vec![Flag::new("followLinks")]);

    assert!(set.find("TestList").is_none());
    assert!(set.find("Vendored").is_none());
}

#[test]
fn test_broken_fixture_is_parse_error() {
    let path = Path::new("tests/test-fixtures/broken.go");
    let result = parser::extract_files(&[path]);

    match result {
        Err(Error::Parse { file, line, .. }) => {
            assert!(file.ends_with("broken.go"));
            assert!(line >= 3, "error should point into the function, got line {}", line);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_every_extracted_command_renders() {
    let set = parser::extract_directory(Path::new("tests/test-fixtures/fileutil")).unwrap();

    for command in set.commands() {
        let help = command.help().unwrap();
        let header = format!("{}: {}", command.name, command.description);

        assert!(help.starts_with(&header));
        assert_eq!(help.contains("Options:"), !command.flags.is_empty());
        assert!(!help.contains("Commands:"));
    }
}
