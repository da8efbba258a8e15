//! Word splitting.
//!
//! Splits each remaining `line` token into keywords, operators, names and
//! integer literals, left to right. Rules are tried in a fixed order:
//!
//! 1. Keywords, only when not followed by an identifier character
//! 2. Multi-character operators
//! 3. Single-character operators and punctuation
//! 4. Names: `[letter_][letter digit _]*`
//! 5. Integers: `0x`/`0o`/`0b` prefixed, or decimal without a leading zero
//!
//! Whitespace after each word is skipped.

use tracing::debug;

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::{
    Position, Token, TokenKind, KEYWORDS, MULTI_CHAR_OPERATORS, SINGLE_CHAR_OPERATORS,
};
use crate::unicode::{is_digit_in_base, is_ident_continue, is_ident_start, radix_for_prefix};

/// Splits `line` tokens into words. Other tokens pass through.
#[derive(Debug)]
pub struct WordSplitter<I> {
    upstream: I,
    /// The line being split and how far into it we are.
    current: Option<PendingLine>,
    finished: bool,
}

#[derive(Debug)]
struct PendingLine {
    text: String,
    origin: Position,
    /// Byte offset of the next word.
    offset: usize,
    /// Characters consumed before `offset`.
    consumed: usize,
}

impl<I> WordSplitter<I>
where
    I: Iterator<Item = LexResult<Token>>,
{
    /// Wraps `upstream`.
    pub fn new(upstream: I) -> Self {
        Self {
            upstream,
            current: None,
            finished: false,
        }
    }

    /// Lexes the next word of the current line, dropping the line once it is
    /// exhausted.
    fn next_in_line(&mut self) -> Option<LexResult<Token>> {
        let line = self.current.as_mut()?;

        let mut cursor = Cursor::new(&line.text[line.offset..], line.origin.offset(line.consumed));
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            self.current = None;
            return None;
        }

        let result = next_word(&mut cursor);
        line.offset += cursor.offset();
        line.consumed = cursor.position().column - line.origin.column;
        Some(result)
    }
}

impl<I> Iterator for WordSplitter<I>
where
    I: Iterator<Item = LexResult<Token>>,
{
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if let Some(result) = self.next_in_line() {
                if let Err(err) = &result {
                    debug!(kind = ?err.kind, position = %err.position, "word splitting failed");
                    self.finished = true;
                    self.current = None;
                }
                return Some(result);
            }

            match self.upstream.next()? {
                Ok(token) if token.kind == TokenKind::Line => {
                    let origin = token.position;
                    if let Some(text) = token.into_text() {
                        self.current = Some(PendingLine {
                            text,
                            origin,
                            offset: 0,
                            consumed: 0,
                        });
                    }
                }
                Ok(token) => return Some(Ok(token)),
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Lexes one word at the cursor and skips the whitespace after it.
///
/// ```
/// use koi_lex::cursor::Cursor;
/// use koi_lex::pass::next_word;
/// use koi_lex::{Position, TokenKind};
///
/// let mut cursor = Cursor::new("0x1F  + y", Position::new(0, 4));
/// let token = next_word(&mut cursor).unwrap();
/// assert_eq!(token.kind, TokenKind::Int);
/// assert_eq!(token.int(), Some(31));
/// assert_eq!(cursor.position(), Position::new(0, 10));
/// ```
///
/// # Errors
///
/// [`LexErrorKind::UnrecognizedToken`] when no rule matches, and
/// [`LexErrorKind::IntegerOverflow`] for an integer that does not fit `u64`.
pub fn next_word(cursor: &mut Cursor<'_>) -> LexResult<Token> {
    let position = cursor.position();
    let token = if let Some(token) = lex_keyword(cursor) {
        token
    } else if let Some(token) = lex_operator(cursor) {
        token
    } else if let Some(token) = lex_name(cursor) {
        token
    } else if let Some(result) = lex_integer(cursor) {
        result?
    } else {
        return Err(LexError::new(LexErrorKind::UnrecognizedToken, position));
    };
    cursor.skip_whitespace();
    Ok(token)
}

fn lex_keyword(cursor: &mut Cursor<'_>) -> Option<Token> {
    let position = cursor.position();
    KEYWORDS.iter().find_map(|&(text, kind)| {
        let len = text.chars().count();
        let boundary = cursor.peek_char(len).map_or(true, |c| !is_ident_continue(c));
        if cursor.starts_with(text) && boundary {
            cursor.advance_n(len);
            Some(Token::new(kind, position))
        } else {
            None
        }
    })
}

fn lex_operator(cursor: &mut Cursor<'_>) -> Option<Token> {
    let position = cursor.position();
    if let Some(&(text, kind)) = MULTI_CHAR_OPERATORS
        .iter()
        .find(|(text, _)| cursor.starts_with(text))
    {
        cursor.advance_n(text.chars().count());
        return Some(Token::new(kind, position));
    }

    let current = cursor.current_char()?;
    let &(_, kind) = SINGLE_CHAR_OPERATORS.iter().find(|(c, _)| *c == current)?;
    cursor.advance();
    Some(Token::new(kind, position))
}

fn lex_name(cursor: &mut Cursor<'_>) -> Option<Token> {
    let position = cursor.position();
    if !cursor.current_char().is_some_and(is_ident_start) {
        return None;
    }
    let start = cursor.offset();
    cursor.advance();
    cursor.eat_while(is_ident_continue);
    Some(Token::with_text(
        TokenKind::Name,
        position,
        cursor.slice_from(start),
    ))
}

/// Lexes an integer literal, trying hex, octal and binary before decimal.
///
/// A radix prefix with no digit after it is not a prefixed literal; the `0`
/// alone then matches as decimal.
fn lex_integer(cursor: &mut Cursor<'_>) -> Option<LexResult<Token>> {
    let position = cursor.position();
    let first = cursor.current_char()?;
    if !first.is_ascii_digit() {
        return None;
    }

    if first == '0' {
        let prefixed = cursor.peek_char(1).and_then(radix_for_prefix);
        if let Some(radix) = prefixed {
            if cursor.peek_char(2).is_some_and(|c| is_digit_in_base(c, radix)) {
                cursor.advance_n(2);
                let start = cursor.offset();
                cursor.eat_while(|c| is_digit_in_base(c, radix));
                return Some(parse_integer(cursor.slice_from(start), radix, position));
            }
        }
        cursor.advance();
        return Some(Ok(Token::with_int(position, 0)));
    }

    let start = cursor.offset();
    cursor.eat_while(|c| c.is_ascii_digit());
    Some(parse_integer(cursor.slice_from(start), 10, position))
}

fn parse_integer(digits: &str, radix: u32, position: Position) -> LexResult<Token> {
    u64::from_str_radix(digits, radix)
        .map(|value| Token::with_int(position, value))
        .map_err(|_| LexError::new(LexErrorKind::IntegerOverflow, position))
}
