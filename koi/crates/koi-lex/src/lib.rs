//! koi-lex - Lexical Analyzer for the Koi Programming Language
//!
//! This crate turns Koi source text into a flat stream of positioned tokens
//! for the parser. Koi is indentation sensitive, so besides words the stream
//! carries explicit `open_level` / `close_level` tokens for block structure.
//!
//! # Overview
//!
//! Lexing is a pipeline of lazy passes. Each pass wraps the one before it and
//! produces a token only when asked for one:
//!
//! 1. [`LineSplitter`] - one `line` token per physical line, then `eof`
//! 2. [`StringExtractor`] - quoted text becomes `string` tokens
//! 3. [`CommentFilter`] - comments and blank lines disappear
//! 4. [`IndentTracker`] - leading whitespace becomes block structure
//! 5. [`WordSplitter`] - lines become keywords, operators, names and integers
//!
//! Positions are zero-based `(row, column)` pairs into the original source,
//! kept exact through every pass.
//!
//! # Example Usage
//!
//! ```
//! use koi_lex::{tokenize, TokenKind};
//!
//! let source = "fib = n ->\n  n\n";
//! let kinds: Vec<TokenKind> = tokenize(source)
//!     .map(|token| token.unwrap().kind)
//!     .collect();
//!
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Name,
//!         TokenKind::Assign,
//!         TokenKind::Name,
//!         TokenKind::Arrow,
//!         TokenKind::OpenLevel,
//!         TokenKind::Name,
//!         TokenKind::CloseLevel,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, position and kind definitions
//! - [`error`] - Lexical and configuration errors
//! - [`config`] - Delimiter configuration
//! - [`pass`] - The pipeline passes
//! - [`cursor`] - Character cursor used by the word splitter
//! - [`unicode`] - Character classes
//!
//! # Errors
//!
//! Every lexical error is fatal. The pass that detects it yields a
//! [`LexError`] once and then ends, and so does the whole pipeline.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod pass;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use error::{ConfigError, LexError, LexErrorKind, LexResult};
pub use pass::{
    CommentFilter, IndentTracker, LineSplitter, StringExtractor, TokenStreamExt, WordSplitter,
};
pub use token::{Position, Token, TokenKind, TokenValue};

/// The fully composed lexer pipeline over a source string.
pub type Tokens<'a> =
    WordSplitter<IndentTracker<CommentFilter<StringExtractor<LineSplitter<'a>>>>>;

/// Lexes `source` with the default delimiters.
pub fn tokenize(source: &str) -> Tokens<'_> {
    pipeline(source, &LexerConfig::default())
}

/// Lexes `source` with the delimiters from `config`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if `config` fails [`LexerConfig::validate`]. No
/// token is produced from an invalid configuration.
///
/// ```
/// use koi_lex::{tokenize_with, ConfigError, LexerConfig};
///
/// let config = LexerConfig { comment: '"', ..LexerConfig::default() };
/// assert!(matches!(
///     tokenize_with("x", &config),
///     Err(ConfigError::Conflict { .. })
/// ));
/// ```
pub fn tokenize_with<'a>(
    source: &'a str,
    config: &LexerConfig,
) -> Result<Tokens<'a>, ConfigError> {
    config.validate()?;
    Ok(pipeline(source, config))
}

fn pipeline<'a>(source: &'a str, config: &LexerConfig) -> Tokens<'a> {
    LineSplitter::new(source)
        .extract_strings(config)
        .filter_comments(config)
        .track_indentation()
        .split_words()
}

/// Lexes all of `source`, stopping at the first error.
///
/// ```
/// use koi_lex::{tokenize_all, LexErrorKind, Position};
///
/// let err = tokenize_all("  x").unwrap_err();
/// assert_eq!(err.kind, LexErrorKind::InitialIndent);
/// assert_eq!(err.position, Position::new(0, 2));
/// ```
pub fn tokenize_all(source: &str) -> LexResult<Vec<Token>> {
    tokenize(source).collect()
}
