//! String literal extraction.
//!
//! Quoted text becomes a single `string` token, even when it runs across
//! several physical lines. The text around it stays in `line` tokens that keep
//! their original positions, so later passes never see a line break that
//! belongs to a string.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::{Position, Token, TokenKind};

/// A string literal whose closing quote has not been seen yet.
#[derive(Debug)]
struct OpenString {
    /// Position of the first content character.
    position: Position,
    value: String,
}

/// Splits `line` tokens into `line` fragments and `string` tokens.
///
/// A quote or comment marker directly preceded by the escape character is
/// ordinary text. The contents are kept verbatim; escapes are not decoded.
/// An unescaped comment marker outside a string ends string scanning for the
/// rest of that line.
///
/// # Errors
///
/// Reaching `eof` inside a string yields [`LexErrorKind::UnclosedString`] at
/// the `eof` position.
#[derive(Debug)]
pub struct StringExtractor<I> {
    upstream: I,
    config: LexerConfig,
    open: Option<OpenString>,
    pending: VecDeque<Token>,
    finished: bool,
}

impl<I> StringExtractor<I>
where
    I: Iterator<Item = LexResult<Token>>,
{
    /// Wraps `upstream`, using the quote, comment and escape characters of
    /// `config`.
    pub fn new(upstream: I, config: &LexerConfig) -> Self {
        Self {
            upstream,
            config: *config,
            open: None,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Scans one physical line, queueing the fragments and strings it holds.
    fn scan_line(&mut self, text: &str, origin: Position) {
        let LexerConfig {
            quote,
            comment,
            escape,
        } = self.config;
        let open = &mut self.open;
        let pending = &mut self.pending;

        let mut fragment_start = 0;
        let mut fragment_column = origin.column;
        let mut previous = None;

        for (offset, (index, ch)) in text.char_indices().enumerate() {
            let escaped = previous == Some(escape);
            previous = Some(ch);
            let here = origin.offset(offset);

            if open.is_some() {
                if ch == quote && !escaped {
                    if let Some(string) = open.take() {
                        trace!(at = %string.position, "string closed");
                        pending.push_back(Token::with_text(
                            TokenKind::String,
                            string.position,
                            string.value,
                        ));
                    }
                    fragment_start = index + ch.len_utf8();
                    fragment_column = here.column + 1;
                } else if let Some(string) = open.as_mut() {
                    string.value.push(ch);
                }
            } else if ch == comment && !escaped {
                break;
            } else if ch == quote && !escaped {
                if index > fragment_start {
                    pending.push_back(Token::line(
                        Position::new(origin.row, fragment_column),
                        &text[fragment_start..index],
                    ));
                }
                *open = Some(OpenString {
                    position: here.offset(1),
                    value: String::new(),
                });
            }
        }

        match open {
            Some(string) => {
                trace!(
                    at = %string.position,
                    row = origin.row,
                    "string continues past end of line"
                );
            }
            None if fragment_start < text.len() => {
                pending.push_back(Token::line(
                    Position::new(origin.row, fragment_column),
                    &text[fragment_start..],
                ));
            }
            None => {}
        }
    }

    fn fail(&mut self, kind: LexErrorKind, position: Position) -> LexError {
        self.finished = true;
        self.open = None;
        debug!(?kind, %position, "string extraction failed");
        LexError::new(kind, position)
    }
}

impl<I> Iterator for StringExtractor<I>
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

            let token = match self.upstream.next() {
                Some(Ok(token)) => token,
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err));
                }
                None => {
                    self.finished = true;
                    let position = self.open.as_ref()?.position;
                    return Some(Err(self.fail(LexErrorKind::UnclosedString, position)));
                }
            };

            match token.kind {
                TokenKind::Line => {
                    let text = token.text().unwrap_or_default();
                    self.scan_line(text, token.position);
                }
                TokenKind::Eof if self.open.is_some() => {
                    return Some(Err(self.fail(LexErrorKind::UnclosedString, token.position)));
                }
                _ => return Some(Ok(token)),
            }
        }
    }
}
