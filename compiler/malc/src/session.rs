//! Read-eval-print over source text.

use mal_eval::{stdout_handler, Interpreter, SharedPrintHandler};
use mal_fmt::render;
use mal_parse::Reader;
use tracing::debug;

use crate::Problem;

/// One interpreter and its accumulated definitions.
///
/// Every call to [`rep`](Self::rep) or [`run_file`](Self::run_file)
/// evaluates in the same root environment, so a `def!` made by one call is
/// visible to the next.
pub struct Session {
    interp: Interpreter,
}

impl Session {
    /// A session whose `prn` writes to stdout.
    pub fn new() -> Result<Self, Problem> {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(handler: SharedPrintHandler) -> Result<Self, Problem> {
        let interp = Interpreter::builder().print_handler(handler).build()?;
        Ok(Session { interp })
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }

    /// Read, evaluate and print every top-level form in `text`, in order.
    ///
    /// Returns the readable rendering of each result. Forms are read one at
    /// a time, so everything before the first error (syntax or evaluation)
    /// has already run when the error is returned.
    pub fn rep(&self, text: &str) -> Result<Vec<String>, Problem> {
        let mut reader = Reader::new(text);
        let mut results = Vec::new();
        while !reader.is_at_end() {
            let form = reader.read_form()?;
            let value = self.interp.eval(&form)?;
            results.push(render(&value, true));
        }
        debug!(forms = results.len(), "rep");
        Ok(results)
    }

    /// Evaluate the file at `path` as `load-file` does.
    pub fn run_file(&self, path: &str) -> Result<(), Problem> {
        debug!(path, "run file");
        self.interp.load_file(path)?;
        Ok(())
    }
}
