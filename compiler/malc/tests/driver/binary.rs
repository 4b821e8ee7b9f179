//! Tests against the built `mal` executable.

use std::io::Write;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn mal(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mal"))
        .args(args)
        .env_remove("MAL_LOG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn eval_prints_each_result() {
    let output = mal(&["eval", "(def! x 10) (* x x)"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10\n100\n");
}

#[test]
fn eval_error_exits_with_one() {
    let output = mal(&["eval", "(car 1)"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: 'car' not found\n");
}

#[test]
fn run_prints_only_program_output() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "(def! greet (fn* (who) (str \"hello, \" who)))").unwrap();
    writeln!(file, "(prn (greet \"mal\"))").unwrap();
    writeln!(file, "(greet \"unused\")").unwrap();

    let output = mal(&["run", file.path().to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "\"hello, mal\"\n");
}

#[test]
fn run_syntax_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(prn 1").unwrap();

    let output = mal(&["run", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: syntax error"));
}

#[test]
fn no_arguments_prints_usage() {
    let output = mal(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Usage: mal"));
}

#[test]
fn bad_command_prints_usage_to_stderr() {
    let output = mal(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error: unknown command 'frobnicate'"));
    assert!(err.contains("Usage: mal"));
}
