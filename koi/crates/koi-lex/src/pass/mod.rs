//! Lexer passes.
//!
//! The lexer is a chain of lazy stream transforms, each wrapping the one
//! before it:
//! - `line` - Split source text into physical lines and an `eof` token
//! - `string` - Extract string literals, possibly spanning several lines
//! - `comment` - Strip comments and drop blank lines
//! - `indent` - Turn leading whitespace into `open_level`/`close_level`
//! - `word` - Split the remaining lines into keywords, operators and literals
//!
//! Every pass is an [`Iterator`] over [`LexResult<Token>`]. A pass that yields
//! an error yields nothing afterwards.

mod comment;
mod indent;
mod line;
mod string;
mod word;

pub use comment::CommentFilter;
pub use indent::IndentTracker;
pub use line::LineSplitter;
pub use string::StringExtractor;
pub use word::{next_word, WordSplitter};

pub(crate) use line::line_break_count;

use crate::config::LexerConfig;
use crate::error::LexResult;
use crate::token::Token;

/// Chains lexer passes onto any token stream.
///
/// ```
/// use koi_lex::pass::{LineSplitter, TokenStreamExt};
/// use koi_lex::{LexerConfig, TokenKind};
///
/// let config = LexerConfig::default();
/// let kinds: Vec<TokenKind> = LineSplitter::new("a\n; note\n")
///     .filter_comments(&config)
///     .map(|token| token.unwrap().kind)
///     .collect();
/// assert_eq!(kinds, [TokenKind::Line, TokenKind::Eof]);
/// ```
pub trait TokenStreamExt: Iterator<Item = LexResult<Token>> + Sized {
    /// Pulls string literals out of `line` tokens.
    fn extract_strings(self, config: &LexerConfig) -> StringExtractor<Self> {
        StringExtractor::new(self, config)
    }

    /// Strips comments and drops blank `line` tokens.
    fn filter_comments(self, config: &LexerConfig) -> CommentFilter<Self> {
        CommentFilter::new(self, config)
    }

    /// Converts leading whitespace into block structure tokens.
    fn track_indentation(self) -> IndentTracker<Self> {
        IndentTracker::new(self)
    }

    /// Splits `line` tokens into words.
    fn split_words(self) -> WordSplitter<Self> {
        WordSplitter::new(self)
    }
}

impl<I: Iterator<Item = LexResult<Token>>> TokenStreamExt for I {}
