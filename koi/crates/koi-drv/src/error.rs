//! Error types for the koi driver.

use koi_lex::{ConfigError, LexError};
use koi_par::ParseError;
use thiserror::Error;

/// Everything that can stop the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured delimiters are unusable.
    #[error("Invalid lexer configuration: {0}")]
    Lexer(#[from] ConfigError),

    /// The source could not be tokenized.
    #[error("{0}: {}", .0.kind)]
    Lex(LexError),

    /// The token stream ended without `eof`.
    #[error("{0}")]
    Parse(ParseError),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ParseError> for DriverError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(err) => DriverError::Lex(err),
            other => DriverError::Parse(other),
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
