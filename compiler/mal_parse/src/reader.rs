//! Recursive-descent reader.
//!
//! ```text
//! form := '(' form* ')' | atom
//! atom := number | 'true' | 'false' | 'nil' | string | symbol
//! ```

use mal_lexer::{tokenize, Token, TokenKind};
use mal_stack::ensure_sufficient_stack;
use mal_value::Value;

use crate::cursor::Cursor;
use crate::{ParseError, ParseErrorKind};

/// Reads forms one at a time from a source string.
pub struct Reader<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Reader<'a> {
    pub fn new(src: &'a str) -> Self {
        Reader {
            cursor: Cursor::new(tokenize(src), src.len()),
        }
    }

    /// True once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Read one form.
    pub fn read_form(&mut self) -> Result<Value, ParseError> {
        let Some(token) = self.cursor.peek() else {
            return Err(self.error(ParseErrorKind::UnexpectedEof));
        };
        match token.kind {
            TokenKind::Special if token.is_special(b'(') => self.read_list(),
            TokenKind::Special if token.is_special(b')') => {
                Err(self.error(ParseErrorKind::UnexpectedCloseParen))
            }
            TokenKind::Special | TokenKind::SpliceUnquote => {
                Err(self.error(ParseErrorKind::UnsupportedToken {
                    token: token.text.to_string(),
                }))
            }
            TokenKind::Str | TokenKind::Atom => {
                self.cursor.bump();
                read_atom(token)
            }
        }
    }

    /// Read a list. The cursor is on its `(`.
    fn read_list(&mut self) -> Result<Value, ParseError> {
        self.cursor.bump();
        let mut items = Vec::new();
        loop {
            match self.cursor.peek() {
                None => return Err(self.error(ParseErrorKind::UnexpectedEof)),
                Some(token) if token.is_special(b')') => {
                    self.cursor.bump();
                    return Ok(Value::list(items));
                }
                Some(_) => items.push(ensure_sufficient_stack(|| self.read_form())?),
            }
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.offset())
    }
}

/// Classify a single string or atom token.
fn read_atom(token: Token<'_>) -> Result<Value, ParseError> {
    let text = token.text;
    if token.kind == TokenKind::Str {
        return unescape(text)
            .map(Value::string)
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnterminatedString, token.offset));
    }
    if looks_numeric(text) {
        return text.parse::<f64>().map(Value::Number).map_err(|_| {
            ParseError::new(
                ParseErrorKind::InvalidNumber {
                    token: text.to_string(),
                },
                token.offset,
            )
        });
    }
    Ok(match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "nil" => Value::Nil,
        _ => Value::symbol(text),
    })
}

/// `-?[0-9.]+` with at least one digit.
fn looks_numeric(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    !body.is_empty()
        && body.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && body.bytes().any(|b| b.is_ascii_digit())
}

/// Decode a string token, quotes included.
///
/// `\\`, `\n` and `\"` are decoded; any other backslash is kept together
/// with the character after it. Returns `None` when the closing quote is
/// missing.
fn unescape(token: &str) -> Option<String> {
    let body = token.strip_prefix('"')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return chars.as_str().is_empty().then_some(out),
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                '\\' => out.push('\\'),
                '"' => out.push('"'),
                other => {
                    out.push('\\');
                    out.push(other);
                }
            },
            _ => out.push(c),
        }
    }
    None
}
