//! mal reader.
//!
//! Turns source text into [`Value`]s. There is no separate AST: a program is
//! read as the same lists, symbols and atoms it manipulates at runtime.
//!
//! ```text
//! "(+ 1 (* 2 3))"
//!     │ mal_lexer::tokenize
//!     ▼
//! ( + 1 ( * 2 3 ) )
//!     │ Reader::read_form
//!     ▼
//! List[Symbol(+), Number(1), List[Symbol(*), Number(2), Number(3)]]
//! ```

mod cursor;
mod error;
mod reader;

pub use error::{ParseError, ParseErrorKind};
pub use reader::Reader;

use mal_value::Value;

/// Read the first form in `src`.
///
/// Anything after that form is ignored. Input with no forms at all is an
/// [`ParseErrorKind::EmptyInput`] error.
pub fn parse(src: &str) -> Result<Value, ParseError> {
    let mut reader = Reader::new(src);
    if reader.is_at_end() {
        return Err(ParseError::new(ParseErrorKind::EmptyInput, src.len()));
    }
    reader.read_form()
}

/// Read every top-level form in `src`, in order.
pub fn parse_all(src: &str) -> Result<Vec<Value>, ParseError> {
    let mut reader = Reader::new(src);
    let mut forms = Vec::new();
    while !reader.is_at_end() {
        forms.push(reader.read_form()?);
    }
    Ok(forms)
}
