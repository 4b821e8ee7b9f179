//! Builtins that reach outside the value world: the file system and the
//! evaluator itself.

use mal_value::{
    environment_dropped, io_error, type_mismatch, EvalResult, Value, WeakEnvironment,
};
use tracing::debug;

use super::expect_arity;
use crate::evaluate;

/// `slurp`: the whole file as a string.
pub(super) fn slurp(args: &[Value]) -> EvalResult {
    expect_arity("slurp", args, 1)?;
    let path = args[0]
        .as_str()
        .ok_or_else(|| type_mismatch("slurp", "string", &args[0]))?;
    debug!(path, "slurp");
    std::fs::read_to_string(path)
        .map(Value::string)
        .map_err(|err| io_error(path, &err))
}

/// `eval`: evaluate a value in the environment it was registered in.
///
/// The handle is weak, so the builtin never keeps that environment alive
/// by itself. Closures defined there capture it strongly, so under an
/// `Interpreter` (whose prelude defines `load-file`) the upgrade always
/// succeeds; `EnvironmentDropped` is only reachable when builtins were
/// registered into a bare environment that has since been dropped.
pub(super) fn eval(root: WeakEnvironment) -> Value {
    Value::native("eval", move |args| {
        expect_arity("eval", args, 1)?;
        let env = root.upgrade().ok_or_else(environment_dropped)?;
        evaluate(&args[0], &env)
    })
}
