use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_cligen")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/../core/tests/test-fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn help_output_for_single_file() {
    cmd()
        .arg(fixture_path("copy.go"))
        .assert()
        .success()
        .stdout(
            "Copy: Copy files and directories.\n\nCopy [flags] src dst\n\nOptions:\n  -recursive\t\n",
        );
}

#[test]
fn json_output() {
    let assert = cmd()
        .args(["--format", "json"])
        .arg(fixture_path("copy.go"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let files: serde_json::Value = serde_json::from_str(&output).unwrap();

    let command = &files[0]["commands"][0];
    assert_eq!(command["name"], "Copy");
    assert_eq!(command["arguments"][1]["type_name"], "string");
    assert_eq!(command["flags"][0]["name"], "recursive");
}

#[test]
fn directory_input_separates_commands() {
    cmd()
        .arg(fixture_path("fileutil"))
        .assert()
        .success()
        .stdout(predicate::str::contains("List [flags] dir mode\n"))
        .stdout(predicate::str::contains("\n\nTouch: \n"))
        .stdout(predicate::str::contains("Stat: Stat shows file metadata."))
        .stdout(predicate::str::contains("Walk").not());
}

#[test]
fn file_inside_directory_argument_listed_once() {
    let assert = cmd()
        .arg(fixture_path("fileutil"))
        .arg(fixture_path("fileutil/fileutil.go"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output.matches("List: ").count(), 1);
    assert_eq!(output.matches("Stat: ").count(), 1);
}

#[test]
fn relative_and_absolute_paths_deduplicated() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("copy.go");
    std::fs::write(&file, "package s\n\nfunc Copy() {}\n").unwrap();

    cmd()
        .arg(&file)
        .arg("./copy.go")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Copy: \n\nCopy [flags]\n");
}

#[test]
fn command_filter() {
    cmd()
        .args(["--command", "Remove"])
        .arg(fixture_path("fileutil/fileutil.go"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Remove: Remove deletes a file."))
        .stdout(predicate::str::contains("List").not());
}

#[test]
fn unknown_command_filter_fails() {
    cmd()
        .args(["--command", "Nope"])
        .arg(fixture_path("copy.go"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no command named Nope"));
}

#[test]
fn syntax_error_fails() {
    cmd()
        .arg(fixture_path("broken.go"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing go file"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path().join("missing.go"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.go"));
}

#[test]
fn paths_required() {
    cmd().assert().failure();
}
