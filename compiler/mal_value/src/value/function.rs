//! Function values: user closures and host-provided natives.

use std::fmt;

use super::{Heap, Value};
use crate::{EvalResult, Environment};

/// Signature of a native function body.
pub type NativeFn = dyn Fn(&[Value]) -> EvalResult;

/// A `fn*` value: parameter names, an unevaluated body and the environment
/// that was current when the `fn*` form ran.
pub struct Closure {
    params: Vec<Heap<str>>,
    body: Value,
    env: Environment,
}

impl Closure {
    pub(super) fn new(params: Vec<Heap<str>>, body: Value, env: Environment) -> Self {
        Closure { params, body, env }
    }

    pub fn params(&self) -> &[Heap<str>] {
        &self.params
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The captured defining environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl fmt::Debug for Closure {
    // Omits the environment: it usually contains this closure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.params.iter().map(|p| &**p).collect();
        f.debug_struct("Closure")
            .field("params", &params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// A builtin implemented in Rust.
pub struct NativeFunction {
    name: &'static str,
    func: Box<NativeFn>,
}

impl NativeFunction {
    pub(super) fn new(name: &'static str, func: Box<NativeFn>) -> Self {
        NativeFunction { name, func }
    }

    /// Name the builtin was registered under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunction").field(&self.name).finish()
    }
}
