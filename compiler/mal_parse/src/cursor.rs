//! Token cursor for the reader.

use mal_lexer::Token;
use tracing::trace;

/// Position in a token stream.
///
/// Callers track how much of the stream they have consumed through
/// [`position`](Self::position); nothing is consumed implicitly.
pub(crate) struct Cursor<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    /// Byte length of the source, reported as the offset of EOF errors.
    end: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: Vec<Token<'a>>, end: usize) -> Self {
        Cursor {
            tokens,
            pos: 0,
            end,
        }
    }

    /// The next token, without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    /// Consume and return the next token.
    pub(crate) fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.peek()?;
        trace!(pos = self.pos, text = token.text, "token");
        self.pos += 1;
        Some(token)
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Index of the next token to be consumed.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Byte offset of the next token, or of end of input.
    pub(crate) fn offset(&self) -> usize {
        self.peek().map_or(self.end, |token| token.offset)
    }
}
