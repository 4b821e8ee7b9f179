//! mal value model.
//!
//! Everything the reader produces and the evaluator consumes is a [`Value`]:
//! source code is data. This crate also owns the two things a `Value` can
//! point back into: [`Environment`] (captured by closures) and [`EvalError`]
//! (returned by native functions).
//!
//! # Re-exports
//!
//! - `Value`, `Heap`, `ListItems`, `Closure`, `NativeFunction`, `NativeFn`
//! - `Environment`, `WeakEnvironment`, `LocalScope`, `Scope`
//! - `EvalError`, `EvalErrorKind`, `EvalResult` and the error constructors

mod environment;
pub mod errors;
mod value;

pub use environment::{Environment, LocalScope, Scope, WeakEnvironment};
pub use errors::{
    arity_mismatch, environment_dropped, io_error, malformed_form, not_callable, syntax_error,
    too_few_arguments, type_mismatch, unbound_symbol, EvalError, EvalErrorKind, EvalResult,
};
pub use value::{Closure, Heap, ListItems, NativeFn, NativeFunction, Value};
