//! CLI Driver Tests
//!
//! These tests run the `ulisp` binary against stdin and file input and check
//! the printed token stream, JSON mode, and error exits.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Get the path to the ulisp binary
fn ulisp_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ulisp"))
}

#[test]
fn test_cli_prints_lexemes_from_stdin() {
    let mut cmd = Command::new(ulisp_bin());
    cmd.write_stdin("; comment\n(+ 1 2.5 #t \"hi\")\n");

    cmd.assert().success().stdout(
        "<Lexeme, type: left_paren>\n\
         <Lexeme, type: symbol, value = +>\n\
         <Lexeme, type: int, value = 1>\n\
         <Lexeme, type: float, value = 2.5>\n\
         <Lexeme, type: boolean, value = true>\n\
         <Lexeme, type: string, value = hi>\n\
         <Lexeme, type: right_paren>\n",
    );
}

#[test]
fn test_cli_empty_input() {
    let mut cmd = Command::new(ulisp_bin());
    cmd.write_stdin("   \n; nothing here\n");

    cmd.assert().success().stdout("");
}

#[test]
fn test_cli_json_output() {
    let mut cmd = Command::new(ulisp_bin());
    cmd.arg("--json").write_stdin("'(x 7)");

    cmd.assert().success().stdout(
        "{\"type\":\"quote\"}\n\
         {\"type\":\"left_paren\"}\n\
         {\"type\":\"symbol\",\"value\":\"x\"}\n\
         {\"type\":\"int\",\"value\":7}\n\
         {\"type\":\"right_paren\"}\n",
    );
}

#[test]
fn test_cli_reads_file_argument() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "(define x 10)").unwrap();

    let mut cmd = Command::new(ulisp_bin());
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<Lexeme, type: symbol, value = define>"))
        .stdout(predicate::str::contains("<Lexeme, type: int, value = 10>"));
}

#[test]
fn test_cli_missing_file() {
    let mut cmd = Command::new(ulisp_bin());
    cmd.arg("/definitely/not/here.ulisp");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_cli_stops_on_error() {
    let mut cmd = Command::new(ulisp_bin());
    cmd.write_stdin("(a \"esc\\q\")\n(b)\n");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("value = a"))
        .stdout(predicate::str::contains("value = b").not())
        .stderr(predicate::str::contains(
            "unsupported escape sequence in string",
        ));
}

#[test]
fn test_cli_keep_going_resumes_next_line() {
    let mut cmd = Command::new(ulisp_bin());
    cmd.arg("--keep-going")
        .write_stdin("(a \"esc\\q\")\n(b)\n\"open");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("value = b"))
        .stderr(predicate::str::contains("unsupported escape sequence"))
        .stderr(predicate::str::contains("found EOF while reading a string"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(ulisp_bin());
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ulisp"));
}
