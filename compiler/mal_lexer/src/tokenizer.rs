//! Token classification and the token stream.

use crate::Cursor;

/// Coarse token category.
///
/// The reader only needs to know whether a token is structural, a string
/// literal, or a bare atom; everything finer (numbers, `true`, `nil`, ...)
/// is decided by the reader from the token text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The two-character splice marker `~@`.
    SpliceUnquote,
    /// One of `[ ] { } ( ) ' ` ~ ^ @`.
    Special,
    /// A string literal, including its quotes. May be unterminated.
    Str,
    /// A maximal run of non-delimiter characters.
    Atom,
}

/// A token: its text, where it starts, and its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the first character.
    pub offset: usize,
}

impl Token<'_> {
    /// Is this the single structural character `c`?
    #[inline]
    pub fn is_special(&self, c: u8) -> bool {
        self.kind == TokenKind::Special && self.text.as_bytes() == [c]
    }
}

/// Separators between tokens. Commas are whitespace.
#[inline]
fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b','
}

/// Characters that always form a token of their own.
#[inline]
fn is_special(b: u8) -> bool {
    matches!(
        b,
        b'[' | b']' | b'{' | b'}' | b'(' | b')' | b'\'' | b'`' | b'~' | b'^' | b'@'
    )
}

/// Characters that end a bare atom.
///
/// `~`, `^` and `@` only count as specials at the start of a token; inside a
/// run they are ordinary characters.
#[inline]
fn ends_atom(b: u8) -> bool {
    is_separator(b)
        || matches!(
            b,
            b'[' | b']' | b'{' | b'}' | b'(' | b')' | b'\'' | b'"' | b'`' | b';'
        )
}

/// Iterator over the tokens of a source string.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Tokenizer {
            cursor: Cursor::new(src),
        }
    }

    /// Skip separators and line comments.
    fn skip_trivia(&mut self) {
        loop {
            self.cursor.eat_while(is_separator);
            if self.cursor.current() == b';' {
                self.cursor.eat_until_newline_or_eof();
            } else {
                return;
            }
        }
    }

    fn scan(&mut self) -> Option<Token<'a>> {
        self.skip_trivia();
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            b'~' if self.cursor.peek() == b'@' => {
                self.cursor.advance_n(2);
                TokenKind::SpliceUnquote
            }
            b if is_special(b) => {
                self.cursor.advance();
                TokenKind::Special
            }
            b'"' => {
                self.cursor.advance();
                // Unterminated strings are still tokens; the reader rejects them.
                self.cursor.eat_string_body();
                TokenKind::Str
            }
            _ => {
                self.cursor.eat_while(|b| !ends_atom(b));
                TokenKind::Atom
            }
        };
        Some(Token {
            kind,
            text: self.cursor.slice_from(start),
            offset: start,
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.scan()
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenize the whole of `src`.
pub fn tokenize(src: &str) -> Vec<Token<'_>> {
    Tokenizer::new(src).collect()
}
