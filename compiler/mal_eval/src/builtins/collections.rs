//! List builtins and equality.
//!
//! `count` and `empty?` also accept strings (length in characters) and
//! treat `nil` as the empty list.

use mal_value::{type_mismatch, EvalError, EvalResult, Value};

use super::expect_arity;

pub(super) fn equal(args: &[Value]) -> EvalResult {
    expect_arity("=", args, 2)?;
    Ok(Value::Bool(args[0] == args[1]))
}

pub(super) fn list(args: &[Value]) -> EvalResult {
    Ok(Value::list(args.to_vec()))
}

pub(super) fn is_list(args: &[Value]) -> EvalResult {
    expect_arity("list?", args, 1)?;
    Ok(Value::Bool(args[0].is_list()))
}

pub(super) fn is_empty(args: &[Value]) -> EvalResult {
    expect_arity("empty?", args, 1)?;
    Ok(Value::Bool(length("empty?", &args[0])? == 0))
}

#[allow(clippy::cast_precision_loss)] // Lengths never approach 2^53
pub(super) fn count(args: &[Value]) -> EvalResult {
    expect_arity("count", args, 1)?;
    let len = length("count", &args[0])?;
    Ok(Value::Number(len as f64))
}

fn length(name: &str, value: &Value) -> Result<usize, EvalError> {
    match value {
        Value::List(items) => Ok(items.len()),
        Value::Str(text) => Ok(text.chars().count()),
        Value::Nil => Ok(0),
        other => Err(type_mismatch(name, "list or string", other)),
    }
}
