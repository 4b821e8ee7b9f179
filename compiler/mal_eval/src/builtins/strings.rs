//! Printing, string building and reading.

use mal_fmt::render_all;
use mal_value::{syntax_error, type_mismatch, EvalResult, Value};

use super::expect_arity;
use crate::SharedPrintHandler;

/// `prn`: one line of readable renderings, space-separated. Returns `nil`.
pub(super) fn prn(handler: SharedPrintHandler) -> Value {
    Value::native("prn", move |args| {
        handler.println(&render_all(args, true, " "));
        Ok(Value::Nil)
    })
}

/// `str`: display renderings concatenated.
pub(super) fn concat(args: &[Value]) -> EvalResult {
    Ok(Value::string(render_all(args, false, "")))
}

/// `read-string`: parse the first form of a string without evaluating it.
pub(super) fn read_string(args: &[Value]) -> EvalResult {
    expect_arity("read-string", args, 1)?;
    let src = args[0]
        .as_str()
        .ok_or_else(|| type_mismatch("read-string", "string", &args[0]))?;
    mal_parse::parse(src).map_err(|err| syntax_error(err.to_string()))
}
