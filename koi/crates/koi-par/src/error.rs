//! Parse errors.

use koi_lex::{LexError, Token};
use thiserror::Error;

/// Errors raised while walking a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The front token is not of the expected kind.
    #[error("unexpected {0}")]
    UnexpectedToken(Token),

    /// The lexer failed while producing the stream.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token was requested past `eof` or past the end of the upstream.
    #[error("unexpected end of token stream")]
    EndOfStream,
}

/// Result type alias for parsing operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use koi_lex::{LexErrorKind, Position, TokenKind};

    #[test]
    fn test_unexpected_token_display() {
        let token = Token::with_text(TokenKind::Name, Position::new(0, 0), "x");
        let err = ParseError::UnexpectedToken(token);
        assert_eq!(err.to_string(), "unexpected name \"x\" at 1:1");
    }

    #[test]
    fn test_lex_error_is_transparent() {
        let err: ParseError =
            LexError::new(LexErrorKind::InitialIndent, Position::new(0, 2)).into();
        assert_eq!(err.to_string(), "lexical error at row 1, column 3");
    }
}
