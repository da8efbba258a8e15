//! Lexer configuration.
//!
//! The delimiters used by the string extractor and the comment filter are not
//! hard-wired: they come from a [`LexerConfig`], which can be deserialized
//! from the `[lexer]` table of a `koi.toml` file.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::unicode::is_line_terminator;

/// Delimiter characters used by the line-level stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Opens and closes a string literal.
    #[serde(default = "default_quote")]
    pub quote: char,

    /// Starts a comment that runs to the end of the line.
    #[serde(default = "default_comment")]
    pub comment: char,

    /// When immediately preceding a quote or comment marker, stops it from
    /// acting as a delimiter.
    #[serde(default = "default_escape")]
    pub escape: char,
}

fn default_quote() -> char {
    '"'
}

fn default_comment() -> char {
    ';'
}

fn default_escape() -> char {
    '\\'
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            quote: default_quote(),
            comment: default_comment(),
            escape: default_escape(),
        }
    }
}

impl LexerConfig {
    /// Checks that the delimiters are usable.
    ///
    /// None may be whitespace or a line terminator, and no two roles may share
    /// a character.
    ///
    /// ```
    /// use koi_lex::LexerConfig;
    ///
    /// assert!(LexerConfig::default().validate().is_ok());
    ///
    /// let clash = LexerConfig { comment: '"', ..LexerConfig::default() };
    /// assert!(clash.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let roles = [
            ("quote", self.quote),
            ("comment", self.comment),
            ("escape", self.escape),
        ];

        for &(role, ch) in &roles {
            if ch.is_whitespace() || is_line_terminator(ch) {
                return Err(ConfigError::Whitespace { role, ch });
            }
        }

        for (i, &(first, a)) in roles.iter().enumerate() {
            for &(second, b) in &roles[i + 1..] {
                if a == b {
                    return Err(ConfigError::Conflict {
                        first,
                        second,
                        ch: a,
                    });
                }
            }
        }

        Ok(())
    }
}
