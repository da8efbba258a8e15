//! Indentation tracking.
//!
//! Keeps a stack of open indentation widths and turns changes in leading
//! whitespace into `open_level` / `close_level` tokens.
//!
//! Indentation is measured on the token that starts a physical row: a `line`
//! token at column 0, or a `string` token that is the first token on its row
//! (its width is the column of the opening quote). A `line` fragment at a
//! later column is the tail of a line that contained a string; it only loses
//! its leading whitespace.
//!
//! # Stack invariant
//!
//! The stack starts as `[0]`, is strictly increasing from bottom to top, and
//! every width above the bottom has exactly one unmatched `open_level`.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::{LexError, LexErrorKind, LexResult};
use crate::pass::line_break_count;
use crate::token::{Position, Token, TokenKind};

/// Emits block structure tokens around indented lines.
///
/// ```
/// use koi_lex::pass::IndentTracker;
/// use koi_lex::{Position, Token, TokenKind};
///
/// let lines = vec![
///     Ok(Token::line(Position::new(0, 0), "hello")),
///     Ok(Token::line(Position::new(1, 0), "  cowsay")),
///     Ok(Token::new(TokenKind::Eof, Position::new(2, 0))),
/// ];
/// let kinds: Vec<TokenKind> = IndentTracker::new(lines.into_iter())
///     .map(|token| token.unwrap().kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Line,
///         TokenKind::OpenLevel,
///         TokenKind::Line,
///         TokenKind::CloseLevel,
///         TokenKind::Eof,
///     ]
/// );
/// ```
///
/// # Errors
///
/// - [`LexErrorKind::InitialIndent`] if the first content row is indented.
/// - [`LexErrorKind::DedentMismatch`] if a row dedents to a width that is not
///   on the stack.
///
/// Both are reported just past the offending leading whitespace.
#[derive(Debug)]
pub struct IndentTracker<I> {
    upstream: I,
    levels: Vec<usize>,
    /// Whether any content row has been measured yet.
    seen_content: bool,
    /// Last row covered by a token already passed on.
    last_row: Option<usize>,
    pending: VecDeque<Token>,
    finished: bool,
}

impl<I> IndentTracker<I>
where
    I: Iterator<Item = LexResult<Token>>,
{
    /// Wraps `upstream` with an empty (`[0]`) indentation stack.
    pub fn new(upstream: I) -> Self {
        Self {
            upstream,
            levels: vec![0],
            seen_content: false,
            last_row: None,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Current indentation stack, bottom first.
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    fn top(&self) -> usize {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Applies a row of indentation `width`, queueing structure tokens at
    /// `position`.
    fn indent(&mut self, width: usize, position: Position) -> LexResult<()> {
        if !self.seen_content {
            self.seen_content = true;
            if width != 0 {
                return Err(LexError::new(LexErrorKind::InitialIndent, position));
            }
        }

        if width > self.top() {
            trace!(width, %position, "open level");
            self.levels.push(width);
            self.pending.push_back(Token::new(TokenKind::OpenLevel, position));
        } else if width < self.top() {
            if !self.levels.contains(&width) {
                return Err(LexError::new(LexErrorKind::DedentMismatch, position));
            }
            while self.top() != width {
                trace!(width = self.top(), %position, "close level");
                self.levels.pop();
                self.pending.push_back(Token::new(TokenKind::CloseLevel, position));
            }
        }
        Ok(())
    }

    /// Closes every open level at end of input, then queues `eof`.
    fn close_all(&mut self, eof: Token) {
        while self.levels.len() > 1 {
            self.levels.pop();
            self.pending.push_back(Token::new(TokenKind::CloseLevel, eof.position));
        }
        self.pending.push_back(eof);
        self.finished = true;
    }

    fn starts_row(&self, row: usize) -> bool {
        self.last_row.map_or(true, |last| row > last)
    }

    fn process(&mut self, token: Token) -> LexResult<()> {
        match token.kind {
            TokenKind::Eof => self.close_all(token),
            TokenKind::Line => {
                let text = token.text().unwrap_or_default();
                let rest = text.trim_start_matches(char::is_whitespace);
                let width = text[..text.len() - rest.len()].chars().count();
                let position = token.position.offset(width);

                if token.position.column == 0 {
                    self.indent(width, position)?;
                }
                self.last_row = Some(position.row);
                self.pending.push_back(Token::line(position, rest));
            }
            TokenKind::String => {
                let row = token.position.row;
                if self.starts_row(row) {
                    let quote = token.position.column.saturating_sub(1);
                    self.indent(quote, Position::new(row, quote))?;
                }
                let text = token.text().unwrap_or_default();
                self.last_row = Some(row + line_break_count(text));
                self.pending.push_back(token);
            }
            _ => self.pending.push_back(token),
        }
        Ok(())
    }
}

impl<I> Iterator for IndentTracker<I>
where
    I: Iterator<Item = LexResult<Token>>,
{
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.finished {
                return None;
            }

            let result = match self.upstream.next() {
                Some(Ok(token)) => self.process(token),
                Some(Err(err)) => Err(err),
                None => {
                    self.finished = true;
                    return None;
                }
            };

            if let Err(err) = result {
                debug!(kind = ?err.kind, position = %err.position, "indentation failed");
                self.finished = true;
                self.pending.clear();
                return Some(Err(err));
            }
        }
    }
}
