//! koi-par - Token Walker for the Koi Programming Language
//!
//! The parser side of the lexer boundary. [`TokenWalker`] buffers tokens from
//! a lazy [`koi_lex`] pipeline and offers bounded lookahead plus a checked
//! `forward` step, which is all a recursive descent parser needs from the
//! lexer.
//!
//! # Example Usage
//!
//! ```
//! use koi_lex::{tokenize, TokenKind};
//! use koi_par::{ParseError, TokenWalker};
//!
//! let mut walker = TokenWalker::new(tokenize("return 1"));
//! walker.forward(Some(TokenKind::Return)).unwrap();
//!
//! let err = walker.forward(Some(TokenKind::Name)).unwrap_err();
//! assert!(matches!(err, ParseError::UnexpectedToken(_)));
//! assert_eq!(walker.peek().unwrap().int(), Some(1));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod walker;

pub use error::{ParseError, ParseResult};
pub use walker::TokenWalker;
