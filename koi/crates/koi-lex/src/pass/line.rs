//! Line splitting.
//!
//! Produces one `line` token per physical line, terminator included, followed
//! by a single `eof` token.

use crate::error::LexResult;
use crate::token::{Position, Token, TokenKind};
use crate::unicode::is_line_terminator;

/// Splits source text into `line` tokens and a final `eof`.
///
/// Any character accepted by [`is_line_terminator`] ends a line, and `\r\n`
/// counts as one terminator. The `eof` token sits at the start of
/// the row after the last line when the source ends with a terminator, and
/// just past the last character otherwise.
///
/// ```
/// use koi_lex::pass::LineSplitter;
/// use koi_lex::{Position, Token, TokenKind};
///
/// let tokens: Vec<Token> = LineSplitter::new("a\nbc")
///     .map(Result::unwrap)
///     .collect();
/// assert_eq!(tokens[1], Token::line(Position::new(1, 0), "bc"));
/// assert_eq!(tokens[2], Token::new(TokenKind::Eof, Position::new(1, 2)));
/// ```
#[derive(Clone, Debug)]
pub struct LineSplitter<'a> {
    source: &'a str,
    offset: usize,
    row: usize,
    /// Position just past the last character produced so far.
    end: Position,
    finished: bool,
}

impl<'a> LineSplitter<'a> {
    /// Creates a splitter over the whole source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            row: 0,
            end: Position::default(),
            finished: false,
        }
    }
}

impl<'a> Iterator for LineSplitter<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let rest = &self.source[self.offset..];
        if rest.is_empty() {
            self.finished = true;
            return Some(Ok(Token::new(TokenKind::Eof, self.end)));
        }

        let len = line_end(rest);
        let line = &rest[..len];
        let position = Position::new(self.row, 0);

        self.end = if line_break_count(line) > 0 {
            Position::new(self.row + 1, 0)
        } else {
            Position::new(self.row, line.chars().count())
        };
        self.offset += len;
        self.row += 1;

        Some(Ok(Token::line(position, line)))
    }
}

/// Returns the byte length of the first line of `text`, terminator included.
pub(crate) fn line_end(text: &str) -> usize {
    match text.char_indices().find(|&(_, c)| is_line_terminator(c)) {
        Some((i, '\r')) if text[i + 1..].starts_with('\n') => i + 2,
        Some((i, c)) => i + c.len_utf8(),
        None => text.len(),
    }
}

/// Counts the line terminators in `text`, treating `\r\n` as one.
pub(crate) fn line_break_count(text: &str) -> usize {
    let mut count = 0;
    let mut rest = text;
    while !rest.is_empty() {
        let len = line_end(rest);
        if rest[..len].chars().next_back().is_some_and(is_line_terminator) {
            count += 1;
        }
        rest = &rest[len..];
    }
    count
}
