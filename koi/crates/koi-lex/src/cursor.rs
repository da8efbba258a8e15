//! Character cursor over a single line of text.
//!
//! The word splitter walks each `line` token with a [`Cursor`]. The cursor
//! knows where the line started in the original source, so the position it
//! reports is always a source position, not an offset into the fragment.

use crate::token::Position;

/// A cursor for traversing one line character by character.
///
/// # Example
///
/// ```
/// use koi_lex::cursor::Cursor;
/// use koi_lex::Position;
///
/// let mut cursor = Cursor::new("x = 1", Position::new(3, 2));
/// assert_eq!(cursor.current_char(), Some('x'));
/// cursor.advance();
/// cursor.skip_whitespace();
/// assert_eq!(cursor.position(), Position::new(3, 4));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The line being traversed.
    text: &'a str,

    /// Current byte offset into `text`.
    offset: usize,

    /// Source position of the first character of `text`.
    origin: Position,

    /// Characters consumed so far.
    consumed: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `text`, which begins at `origin`.
    pub fn new(text: &'a str, origin: Position) -> Self {
        Self {
            text,
            offset: 0,
            origin,
            consumed: 0,
        }
    }

    /// Source position of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        self.origin.offset(self.consumed)
    }

    /// The unconsumed rest of the line.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// Returns the current character, or `None` at the end of the line.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character `n` characters ahead (0 = current).
    ///
    /// ```
    /// use koi_lex::cursor::Cursor;
    /// use koi_lex::Position;
    ///
    /// let cursor = Cursor::new("abc", Position::default());
    /// assert_eq!(cursor.peek_char(2), Some('c'));
    /// assert_eq!(cursor.peek_char(3), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Returns true if the rest of the line starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.offset += c.len_utf8();
            self.consumed += 1;
        }
    }

    /// Advances by `count` characters, stopping early at the end.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds, returning the number of characters
    /// consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let start = self.consumed;
        while let Some(c) = self.current_char() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        self.consumed - start
    }

    /// Skips whitespace characters.
    pub fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Returns the text between byte offset `start` and the current offset.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.text[start..self.offset]
    }

    /// Current byte offset, for use with [`Cursor::slice_from`].
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}
