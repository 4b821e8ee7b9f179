//! Driver-level errors.
//!
//! The reader and the evaluator each have their own error type; the driver
//! only needs to know which phase failed and how to print it.

use mal_parse::ParseError;
use mal_value::EvalError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    /// Source text could not be read.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A form was read but failed to evaluate.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Problem {
    pub fn is_parse(&self) -> bool {
        matches!(self, Problem::Parse(_))
    }

    pub fn is_eval(&self) -> bool {
        matches!(self, Problem::Eval(_))
    }
}
