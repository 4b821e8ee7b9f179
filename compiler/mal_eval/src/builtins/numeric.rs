//! Arithmetic and numeric comparison.
//!
//! All numbers are `f64`; division by zero yields an infinity or `NaN`.

use mal_value::{too_few_arguments, type_mismatch, EvalError, EvalResult, Value};

use super::expect_arity;

fn number(name: &str, value: &Value) -> Result<f64, EvalError> {
    value
        .as_number()
        .ok_or_else(|| type_mismatch(name, "number", value))
}

fn numbers(name: &str, args: &[Value]) -> Result<Vec<f64>, EvalError> {
    args.iter().map(|arg| number(name, arg)).collect()
}

pub(super) fn add(args: &[Value]) -> EvalResult {
    Ok(Value::Number(numbers("+", args)?.into_iter().sum()))
}

pub(super) fn mul(args: &[Value]) -> EvalResult {
    Ok(Value::Number(numbers("*", args)?.into_iter().product()))
}

/// `(- x)` negates; `(- x y ...)` subtracts left to right.
pub(super) fn sub(args: &[Value]) -> EvalResult {
    fold_left("-", args, |n| -n, |acc, n| acc - n)
}

/// `(/ x)` is the reciprocal; `(/ x y ...)` divides left to right.
pub(super) fn div(args: &[Value]) -> EvalResult {
    fold_left("/", args, |n| 1.0 / n, |acc, n| acc / n)
}

fn fold_left(
    name: &str,
    args: &[Value],
    unary: fn(f64) -> f64,
    op: fn(f64, f64) -> f64,
) -> EvalResult {
    let nums = numbers(name, args)?;
    let Some((&first, rest)) = nums.split_first() else {
        return Err(too_few_arguments(name, 1, 0));
    };
    Ok(Value::Number(if rest.is_empty() {
        unary(first)
    } else {
        rest.iter().fold(first, |acc, &n| op(acc, n))
    }))
}

fn compare(name: &str, args: &[Value], op: fn(f64, f64) -> bool) -> EvalResult {
    expect_arity(name, args, 2)?;
    let a = number(name, &args[0])?;
    let b = number(name, &args[1])?;
    Ok(Value::Bool(op(a, b)))
}

pub(super) fn lt(args: &[Value]) -> EvalResult {
    compare("<", args, |a, b| a < b)
}

pub(super) fn gt(args: &[Value]) -> EvalResult {
    compare(">", args, |a, b| a > b)
}

pub(super) fn le(args: &[Value]) -> EvalResult {
    compare("<=", args, |a, b| a <= b)
}

pub(super) fn ge(args: &[Value]) -> EvalResult {
    compare(">=", args, |a, b| a >= b)
}
