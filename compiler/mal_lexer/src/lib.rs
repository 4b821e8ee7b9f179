//! mal lexer - splits source text into tokens.
//!
//! The tokenizer is deliberately forgiving: it never reports an error.
//! Anything odd (an unterminated string, a stray `]`) comes out as a token
//! and the reader decides what to make of it.
//!
//! ```text
//! tokenize("(+ 1 2) ; sum")
//!   => ["(", "+", "1", "2", ")"]
//! ```

mod cursor;
mod tokenizer;

pub use cursor::Cursor;
pub use tokenizer::{tokenize, Token, TokenKind, Tokenizer};
