//! An interpreter: a root environment with the builtin library installed
//! and the print handler `prn` writes through.
//!
//! There is no global environment. Each `Interpreter` owns its root, and
//! two interpreters never see each other's definitions.

mod builder;

pub use builder::InterpreterBuilder;

use mal_value::{Environment, EvalError, EvalResult, Value};

use crate::{evaluate, SharedPrintHandler};

/// Defines `load-file` in terms of the other builtins. The trailing `nil`
/// keeps a file's last value from leaking out, and the newline keeps a
/// trailing comment from swallowing the closing paren.
const PRELUDE: &str =
    r#"(def! load-file (fn* (f) (eval (read-string (str "(do " (slurp f) "\nnil)")))))"#;

pub struct Interpreter {
    root: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter printing to stdout.
    pub fn new() -> Result<Self, EvalError> {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The root environment.
    pub fn root(&self) -> &Environment {
        &self.root
    }

    /// Evaluate `ast` in the root environment.
    pub fn eval(&self, ast: &Value) -> EvalResult {
        evaluate(ast, &self.root)
    }

    /// Evaluate every form in the file at `path`, as `(load-file path)` would.
    pub fn load_file(&self, path: &str) -> EvalResult {
        let form = Value::list(vec![Value::symbol("load-file"), Value::string(path)]);
        self.eval(&form)
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured by a buffer print handler.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Clear captured print output.
    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }
}
