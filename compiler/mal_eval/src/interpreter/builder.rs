//! `InterpreterBuilder` for creating `Interpreter` instances.

use mal_value::{syntax_error, Environment, EvalError};

use super::{Interpreter, PRELUDE};
use crate::{evaluate, register_builtins, stdout_handler, SharedPrintHandler};

/// Builder for creating `Interpreter` instances.
///
/// ```text
/// let interp = Interpreter::builder().print_handler(buffer_handler()).build()?;
/// ```
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where `prn` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Create the root environment, install the builtins and run the prelude.
    pub fn build(self) -> Result<Interpreter, EvalError> {
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);
        let root = Environment::new();
        register_builtins(&root, &print_handler);

        let prelude = mal_parse::parse(PRELUDE)
            .map_err(|err| syntax_error(err.to_string()))?;
        evaluate(&prelude, &root)?;

        Ok(Interpreter {
            root,
            print_handler,
        })
    }
}
