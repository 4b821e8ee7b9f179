//! Reader errors.

/// What went wrong while reading.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// No tokens at all (empty, blank or comment-only input).
    #[error("no form to read")]
    EmptyInput,

    /// Tokens ran out before a list was closed.
    #[error("unexpected EOF while reading list")]
    UnexpectedEof,

    /// A `)` with no open list.
    #[error("unexpected ')'")]
    UnexpectedCloseParen,

    /// Reader macros, vectors, maps and metadata are not supported.
    #[error("unsupported syntax '{token}'")]
    UnsupportedToken { token: String },

    /// A string literal with no closing quote.
    #[error("unexpected EOF while reading string")]
    UnterminatedString,

    /// Looks like a number but is not one, e.g. `1.2.3`.
    #[error("invalid number '{token}'")]
    InvalidNumber { token: String },
}

/// A reader error and the byte offset it was detected at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("syntax error at byte {offset}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        ParseError { kind, offset }
    }
}
