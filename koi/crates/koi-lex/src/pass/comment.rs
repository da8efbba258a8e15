//! Comment stripping.
//!
//! Removes everything from the first unescaped comment marker to the end of a
//! `line` token, trims trailing whitespace and line terminators, and drops
//! the token when nothing is left.

use crate::config::LexerConfig;
use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::unicode::is_line_terminator;

/// Strips comments and blank lines. Tokens other than `line` pass through.
#[derive(Debug)]
pub struct CommentFilter<I> {
    upstream: I,
    comment: char,
    escape: char,
    finished: bool,
}

impl<I> CommentFilter<I>
where
    I: Iterator<Item = LexResult<Token>>,
{
    /// Wraps `upstream`, using the comment and escape characters of `config`.
    pub fn new(upstream: I, config: &LexerConfig) -> Self {
        Self {
            upstream,
            comment: config.comment,
            escape: config.escape,
            finished: false,
        }
    }

    /// Returns `text` up to the first comment marker not preceded by the
    /// escape character.
    fn strip_comment<'t>(&self, text: &'t str) -> &'t str {
        let mut previous = None;
        for (index, ch) in text.char_indices() {
            if ch == self.comment && previous != Some(self.escape) {
                return &text[..index];
            }
            previous = Some(ch);
        }
        text
    }
}

impl<I> Iterator for CommentFilter<I>
where
    I: Iterator<Item = LexResult<Token>>,
{
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let token = match self.upstream.next()? {
                Ok(token) => token,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            };

            if token.kind != TokenKind::Line {
                return Some(Ok(token));
            }

            let text = self
                .strip_comment(token.text().unwrap_or_default())
                .trim_end_matches(|c: char| c.is_whitespace() || is_line_terminator(c));
            if !text.is_empty() {
                return Some(Ok(Token::line(token.position, text)));
            }
        }
    }
}
