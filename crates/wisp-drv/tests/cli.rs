//! End-to-end CLI tests for `wispc`: drives the compiled binary with
//! `assert_cmd` instead of calling library functions directly.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{Builder, NamedTempFile};

fn wisp_file(contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".wisp").tempfile().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn run_evaluates_a_script_successfully() {
    let file = wisp_file("LET x = 1 + 2;");
    Command::cargo_bin("wispc")
        .unwrap()
        .arg("run")
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn run_reports_a_division_by_zero_failure() {
    let file = wisp_file("LET x = 1 / 0;");
    Command::cargo_bin("wispc")
        .unwrap()
        .arg("run")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn tokens_prints_the_token_stream() {
    let file = wisp_file("LET x = 1;");
    Command::cargo_bin("wispc")
        .unwrap()
        .arg("tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Identifier"));
}

#[test]
fn ast_prints_the_parsed_tree() {
    let file = wisp_file("LET x = 1;");
    Command::cargo_bin("wispc")
        .unwrap()
        .arg("ast")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("LetStmt"));
}

#[test]
fn ir_prints_the_typed_tree() {
    let file = wisp_file("LET x = 1;");
    Command::cargo_bin("wispc")
        .unwrap()
        .arg("ir")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Integer"));
}

#[test]
fn ir_reports_a_type_error_before_evaluation() {
    let file = wisp_file("LET x: Integer = TRUE;");
    Command::cargo_bin("wispc")
        .unwrap()
        .arg("ir")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("declared type"));
}

#[test]
fn missing_file_fails_with_an_io_error() {
    Command::cargo_bin("wispc")
        .unwrap()
        .arg("run")
        .arg("/nonexistent/path/to/a.wisp")
        .assert()
        .failure();
}
