//! Error types for the Koi lexer.
//!
//! Every lexical error is fatal: the stage that raises it yields the error
//! once and then ends its stream.

use thiserror::Error;

use crate::token::Position;

/// What went wrong while lexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A string was opened but the input ended before its closing quote.
    #[error("unclosed string literal")]
    UnclosedString,

    /// The first content line is indented.
    #[error("first line must not be indented")]
    InitialIndent,

    /// A dedent to a width that matches no open indentation level.
    #[error("dedent does not match any outer indentation level")]
    DedentMismatch,

    /// No word rule matches at this position.
    #[error("unrecognized token")]
    UnrecognizedToken,

    /// An integer literal does not fit in 64 bits.
    #[error("integer literal too large")]
    IntegerOverflow,
}

/// A fatal lexical error with the zero-based position it was detected at.
///
/// The rendering is one-based:
///
/// ```
/// use koi_lex::{LexError, LexErrorKind, Position};
///
/// let err = LexError::new(LexErrorKind::UnclosedString, Position::new(1, 0));
/// assert_eq!(err.to_string(), "lexical error at row 2, column 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("lexical error at row {}, column {}", .position.row + 1, .position.column + 1)]
pub struct LexError {
    /// Error category.
    pub kind: LexErrorKind,
    /// Where the fault was detected.
    pub position: Position,
}

impl LexError {
    /// Creates a new lexical error.
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

/// Error type for an invalid [`LexerConfig`](crate::LexerConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A delimiter is whitespace or a line terminator.
    #[error("{role} character {ch:?} must not be whitespace or a line break")]
    Whitespace {
        /// Which delimiter.
        role: &'static str,
        /// The offending character.
        ch: char,
    },

    /// Two roles share the same character.
    #[error("{first} and {second} characters must differ (both {ch:?})")]
    Conflict {
        /// First role using the character.
        first: &'static str,
        /// Second role using the character.
        second: &'static str,
        /// The shared character.
        ch: char,
    },
}
