//! Lookahead cursor over a lazy token stream.

use std::collections::VecDeque;

use koi_lex::{LexResult, Token, TokenKind};
use tracing::trace;

use crate::error::{ParseError, ParseResult};

/// Buffers tokens pulled from a lexer so a parser can look ahead.
///
/// Tokens are pulled from upstream only when a lookahead needs them. The
/// buffer never reaches past `eof`.
///
/// ```
/// use koi_lex::{tokenize, TokenKind};
/// use koi_par::TokenWalker;
///
/// let mut walker = TokenWalker::new(tokenize("x = 1"));
/// assert_eq!(walker.lookahead(1).unwrap().kind, TokenKind::Assign);
///
/// walker.forward(Some(TokenKind::Name)).unwrap();
/// assert_eq!(walker.peek().unwrap().kind, TokenKind::Assign);
/// ```
#[derive(Debug)]
pub struct TokenWalker<I> {
    upstream: I,
    buffer: VecDeque<Token>,
}

impl<I> TokenWalker<I>
where
    I: Iterator<Item = LexResult<Token>>,
{
    /// Creates a walker with an empty buffer.
    pub fn new(upstream: I) -> Self {
        Self {
            upstream,
            buffer: VecDeque::new(),
        }
    }

    /// Returns the token `n` places ahead of the front without consuming
    /// anything.
    ///
    /// # Errors
    ///
    /// [`ParseError::EndOfStream`] when the stream ends (at `eof` or
    /// otherwise) before `n`, and [`ParseError::Lex`] when the lexer fails
    /// while filling the buffer.
    pub fn lookahead(&mut self, n: usize) -> ParseResult<&Token> {
        while self.buffer.len() <= n {
            if self.buffer.back().is_some_and(Token::is_eof) {
                return Err(ParseError::EndOfStream);
            }
            match self.upstream.next() {
                Some(token) => self.buffer.push_back(token?),
                None => return Err(ParseError::EndOfStream),
            }
        }
        self.buffer.get(n).ok_or(ParseError::EndOfStream)
    }

    /// Returns the front token without consuming it.
    pub fn peek(&mut self) -> ParseResult<&Token> {
        self.lookahead(0)
    }

    /// Discards the front token and returns it.
    ///
    /// With `expected` set, the front token must be of that kind. On a
    /// mismatch the token stays in the buffer and is returned inside
    /// [`ParseError::UnexpectedToken`].
    pub fn forward(&mut self, expected: Option<TokenKind>) -> ParseResult<Token> {
        let token = self.lookahead(0)?;
        if let Some(kind) = expected {
            if token.kind != kind {
                return Err(ParseError::UnexpectedToken(token.clone()));
            }
        }
        let token = self.buffer.pop_front().ok_or(ParseError::EndOfStream)?;
        trace!(%token, "forward");
        Ok(token)
    }

    /// Returns true when the front token is `eof`.
    pub fn is_at_end(&mut self) -> ParseResult<bool> {
        Ok(self.peek()?.is_eof())
    }

    /// Number of tokens pulled but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}
