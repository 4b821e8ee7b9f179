//! Evaluator for mal.
//!
//! - [`evaluate`]: evaluate one value in an environment (the trampoline)
//! - [`Interpreter`]: a root environment with the builtin library installed
//! - [`register_builtins`]: install the builtins into any environment
//! - print handlers: where `prn` writes
//!
//! ```text
//! let interp = Interpreter::new()?;
//! let ast = mal_parse::parse("(+ 1 2)")?;
//! assert_eq!(interp.eval(&ast)?, Value::Number(3.0));
//! ```

mod builtins;
mod eval;
mod interpreter;
mod print_handler;

pub use builtins::register_builtins;
pub use eval::{evaluate, step, SpecialForm, Step};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
