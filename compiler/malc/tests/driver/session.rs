//! `Session` tests.

use std::io::Write;

use mal_eval::buffer_handler;
use mal_parse::ParseErrorKind;
use mal_value::EvalErrorKind;
use malc::{Problem, Session};
use pretty_assertions::assert_eq;

fn session() -> Session {
    Session::with_print_handler(buffer_handler()).unwrap()
}

fn rep(src: &str) -> Result<Vec<String>, Problem> {
    session().rep(src)
}

fn eval_kind(problem: Problem) -> EvalErrorKind {
    match problem {
        Problem::Eval(err) => err.kind,
        Problem::Parse(err) => panic!("expected an evaluation error, got {err}"),
    }
}

// -- Single forms --

#[test]
fn arithmetic() {
    assert_eq!(rep("(+ 1 2)").unwrap(), vec!["3"]);
    assert_eq!(rep("(/ 1 2)").unwrap(), vec!["0.5"]);
    assert_eq!(rep("(- 3)").unwrap(), vec!["-3"]);
}

#[test]
fn results_are_rendered_readably() {
    assert_eq!(rep(r#""a\nb""#).unwrap(), vec![r#""a\nb""#]);
    assert_eq!(rep("(list 1 \"x\" nil)").unwrap(), vec![r#"(1 "x" nil)"#]);
    assert_eq!(rep("(fn* (a) a)").unwrap(), vec!["#<function>"]);
    assert_eq!(rep("+").unwrap(), vec!["#<native +>"]);
}

#[test]
fn non_finite_numbers() {
    assert_eq!(rep("(/ 1 0)").unwrap(), vec!["Infinity"]);
    assert_eq!(rep("(/ -1 0)").unwrap(), vec!["-Infinity"]);
    assert_eq!(rep("(/ 0 0)").unwrap(), vec!["NaN"]);
}

// -- Several forms --

#[test]
fn each_form_gets_a_result() {
    assert_eq!(rep("(def! x 10) (* x x)").unwrap(), vec!["10", "100"]);
}

#[test]
fn empty_text_has_no_results() {
    assert_eq!(rep("").unwrap(), Vec::<String>::new());
    assert_eq!(rep("  ; only a comment").unwrap(), Vec::<String>::new());
}

#[test]
fn definitions_persist_across_calls() {
    let s = session();
    s.rep("(def! inc (fn* (n) (+ n 1)))").unwrap();
    assert_eq!(s.rep("(inc 41)").unwrap(), vec!["42"]);
}

#[test]
fn error_keeps_earlier_definitions() {
    let s = session();
    let problem = s.rep("(def! a 1) (undefined) (def! b 2)").unwrap_err();
    assert!(problem.is_eval());
    assert!(!problem.is_parse());
    assert_eq!(
        eval_kind(problem),
        EvalErrorKind::UnboundSymbol {
            name: "undefined".to_string()
        }
    );
    assert_eq!(s.rep("a").unwrap(), vec!["1"]);
    assert!(s.rep("b").is_err());
}

#[test]
fn syntax_error_after_valid_forms() {
    let s = session();
    let problem = s.rep("(def! a 1) (+ a").unwrap_err();
    assert!(problem.is_parse());
    assert!(matches!(
        problem,
        Problem::Parse(ref err) if err.kind == ParseErrorKind::UnexpectedEof
    ));
    assert_eq!(s.rep("a").unwrap(), vec!["1"]);
}

#[test]
fn problem_messages() {
    assert_eq!(
        rep("(nope)").unwrap_err().to_string(),
        "'nope' not found"
    );
    assert_eq!(
        rep(")").unwrap_err().to_string(),
        "syntax error at byte 0: unexpected ')'"
    );
}

#[test]
fn deeply_nested_data_from_read_string() {
    let s = session();
    let depth = 100_000;
    let nested = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    s.interpreter()
        .root()
        .define("src", mal_value::Value::string(nested));
    assert_eq!(s.rep("(count (read-string src))").unwrap(), vec!["1"]);
    assert_eq!(
        s.rep("(= (read-string src) (read-string src))").unwrap(),
        vec!["true"]
    );
}

// -- Programs --

#[test]
fn prn_goes_to_the_print_handler() {
    let s = session();
    assert_eq!(s.rep("(prn (list 1 2) \"s\")").unwrap(), vec!["nil"]);
    assert_eq!(s.interpreter().get_print_output(), "(1 2) \"s\"\n");
}

#[test]
fn recursion_program() {
    let src = "
        (def! fib (fn* (n) (if (< n 2) n (+ (fib (- n 1)) (fib (- n 2))))))
        (fib 15)
    ";
    assert_eq!(rep(src).unwrap(), vec!["#<function>", "610"]);
}

#[test]
fn run_file_evaluates_program() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "; squares").unwrap();
    writeln!(file, "(def! square (fn* (x) (* x x)))").unwrap();
    writeln!(file, "(prn (square 12))").unwrap();

    let s = session();
    s.run_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(s.interpreter().get_print_output(), "144\n");
    assert_eq!(s.rep("(square 3)").unwrap(), vec!["9"]);
}

#[test]
fn run_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nothing.mal");
    let problem = session().run_file(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(eval_kind(problem), EvalErrorKind::Io { .. }));
}
