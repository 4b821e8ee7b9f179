//! The builtin library.
//!
//! Every builtin is a plain `fn(&[Value]) -> EvalResult` except the two that
//! need something from their interpreter: `prn` holds the print handler and
//! `eval` holds a weak handle to the environment it was registered in.

mod collections;
mod host;
mod numeric;
mod strings;

use mal_value::{arity_mismatch, Environment, EvalError, EvalResult, Value};

use crate::SharedPrintHandler;

type Builtin = fn(&[Value]) -> EvalResult;

const PURE_BUILTINS: &[(&str, Builtin)] = &[
    ("+", numeric::add),
    ("-", numeric::sub),
    ("*", numeric::mul),
    ("/", numeric::div),
    ("<", numeric::lt),
    (">", numeric::gt),
    ("<=", numeric::le),
    (">=", numeric::ge),
    ("=", collections::equal),
    ("list", collections::list),
    ("list?", collections::is_list),
    ("empty?", collections::is_empty),
    ("count", collections::count),
    ("str", strings::concat),
    ("read-string", strings::read_string),
    ("slurp", host::slurp),
];

/// Bind every builtin into `env`.
///
/// `eval` evaluates in `env` itself, so `env` should be the root.
pub fn register_builtins(env: &Environment, print_handler: &SharedPrintHandler) {
    for &(name, func) in PURE_BUILTINS {
        env.define(name, Value::native(name, func));
    }
    env.define("prn", strings::prn(print_handler.clone()));
    env.define("eval", host::eval(env.downgrade()));
    tracing::debug!(count = PURE_BUILTINS.len() + 2, "registered builtins");
}

/// Fail unless exactly `expected` arguments were passed.
fn expect_arity(name: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(arity_mismatch(name, expected, args.len()))
    }
}
