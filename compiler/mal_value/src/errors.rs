//! Evaluation errors.
//!
//! [`EvalErrorKind`] is the structured category; [`EvalError`] is what
//! actually travels through `Result`s. Construct errors through the factory
//! functions below rather than building kinds by hand, so messages stay in
//! one place.
//!
//! The evaluator never recovers from an error: it aborts the current
//! evaluation and the caller decides what to report.

use std::fmt;

use crate::Value;

/// Result of evaluating a form or calling a function.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// Symbol not bound in any enclosing scope.
    #[error("'{name}' not found")]
    UnboundSymbol { name: String },

    /// Application head is neither a closure nor a native function.
    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },

    #[error("{name} expects {expected} {}, got {got}", arguments(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("{name} expects at least {min} {}, got {got}", arguments(.min))]
    TooFewArguments { name: String, min: usize, got: usize },

    #[error("{name}: expected {expected}, got {got}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        got: &'static str,
    },

    /// A special form with the wrong shape, e.g. `(def! 1 2)`.
    #[error("malformed {form}: {reason}")]
    MalformedForm {
        form: &'static str,
        reason: &'static str,
    },

    /// `slurp` could not read a file.
    #[error("cannot read '{path}': {message}")]
    Io { path: String, message: String },

    /// `read-string` was handed malformed source.
    #[error("{message}")]
    Syntax { message: String },

    /// `eval` was called after its interpreter was dropped.
    #[error("eval: the root environment no longer exists")]
    EnvironmentDropped,
}

fn arguments(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for EvalError {}

// Lookup and application

pub fn unbound_symbol(name: &str) -> EvalError {
    EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    }
    .into()
}

pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalErrorKind::NotCallable { type_name }.into()
}

pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    }
    .into()
}

pub fn too_few_arguments(name: &str, min: usize, got: usize) -> EvalError {
    EvalErrorKind::TooFewArguments {
        name: name.to_string(),
        min,
        got,
    }
    .into()
}

/// `value` was passed to `name` where an `expected` was required.
pub fn type_mismatch(name: &str, expected: &'static str, value: &Value) -> EvalError {
    EvalErrorKind::TypeMismatch {
        name: name.to_string(),
        expected,
        got: value.type_name(),
    }
    .into()
}

// Special forms

pub fn malformed_form(form: &'static str, reason: &'static str) -> EvalError {
    EvalErrorKind::MalformedForm { form, reason }.into()
}

// Host interaction

pub fn io_error(path: &str, err: &std::io::Error) -> EvalError {
    EvalErrorKind::Io {
        path: path.to_string(),
        message: err.to_string(),
    }
    .into()
}

pub fn syntax_error(message: impl Into<String>) -> EvalError {
    EvalErrorKind::Syntax {
        message: message.into(),
    }
    .into()
}

pub fn environment_dropped() -> EvalError {
    EvalErrorKind::EnvironmentDropped.into()
}

#[cfg(test)]
mod tests;
