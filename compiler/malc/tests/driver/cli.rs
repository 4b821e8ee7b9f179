//! Argument parsing tests.

use malc::{parse_args, Command, RunOptions, UsageError};
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Result<RunOptions, UsageError> {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    parse_args(&args)
}

fn command(args: &[&str]) -> Command {
    parse(args).unwrap().command
}

#[test]
fn no_arguments_is_help() {
    assert_eq!(command(&[]), Command::Help);
    assert_eq!(command(&["help"]), Command::Help);
    assert_eq!(command(&["--help"]), Command::Help);
    assert_eq!(command(&["run", "-h"]), Command::Help);
}

#[test]
fn run_and_eval() {
    assert_eq!(
        command(&["run", "prog.mal"]),
        Command::Run {
            path: "prog.mal".to_string()
        }
    );
    assert_eq!(
        command(&["eval", "(+ 1 2)"]),
        Command::Eval {
            source: "(+ 1 2)".to_string()
        }
    );
}

#[test]
fn log_filter_anywhere() {
    let options = parse(&["--log", "mal_eval=trace", "eval", "1"]).unwrap();
    assert_eq!(options.log_filter.as_deref(), Some("mal_eval=trace"));
    let options = parse(&["eval", "1", "--log", "debug"]).unwrap();
    assert_eq!(options.log_filter.as_deref(), Some("debug"));
    assert_eq!(parse(&["eval", "1"]).unwrap().log_filter, None);
}

#[test]
fn usage_errors() {
    assert_eq!(
        parse(&["compile", "x"]).unwrap_err(),
        UsageError::UnknownCommand("compile".to_string())
    );
    assert_eq!(
        parse(&["run"]).unwrap_err(),
        UsageError::MissingArgument {
            command: "run",
            what: "a file path"
        }
    );
    assert_eq!(
        parse(&["eval", "1", "2"]).unwrap_err(),
        UsageError::UnexpectedArgument("2".to_string())
    );
    assert!(matches!(
        parse(&["eval", "1", "--log"]).unwrap_err(),
        UsageError::MissingArgument { .. }
    ));
}

#[test]
fn usage_error_messages() {
    assert_eq!(
        UsageError::MissingArgument {
            command: "eval",
            what: "an expression"
        }
        .to_string(),
        "'eval' needs an expression"
    );
}
