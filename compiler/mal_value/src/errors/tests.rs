use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(unbound_symbol("abc").to_string(), "'abc' not found");
    assert_eq!(not_callable("number").to_string(), "number is not callable");
    assert_eq!(
        type_mismatch("+", "number", &Value::string("x")).to_string(),
        "+: expected number, got string"
    );
    assert_eq!(
        malformed_form("def!", "name must be a symbol").to_string(),
        "malformed def!: name must be a symbol"
    );
    assert_eq!(syntax_error("unexpected EOF").to_string(), "unexpected EOF");
    assert_eq!(
        environment_dropped().to_string(),
        "eval: the root environment no longer exists"
    );
}

#[test]
fn arity_messages_pluralize() {
    assert_eq!(
        arity_mismatch("count", 1, 2).to_string(),
        "count expects 1 argument, got 2"
    );
    assert_eq!(
        arity_mismatch("<", 2, 3).to_string(),
        "< expects 2 arguments, got 3"
    );
    assert_eq!(
        too_few_arguments("-", 1, 0).to_string(),
        "- expects at least 1 argument, got 0"
    );
}

#[test]
fn io_error_keeps_path_and_reason() {
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let eval_err = io_error("missing.mal", &err);
    assert_eq!(
        eval_err.kind,
        EvalErrorKind::Io {
            path: "missing.mal".to_string(),
            message: "no such file".to_string(),
        }
    );
    assert_eq!(eval_err.to_string(), "cannot read 'missing.mal': no such file");
}

#[test]
fn kind_accessor_and_conversion() {
    let err: EvalError = EvalErrorKind::EnvironmentDropped.into();
    assert_eq!(err.kind(), &EvalErrorKind::EnvironmentDropped);
    assert_eq!(err, EvalError::new(EvalErrorKind::EnvironmentDropped));
}
