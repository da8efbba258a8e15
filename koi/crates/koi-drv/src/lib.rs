//! koi-drv - Driver for the Koi Lexer
//!
//! Reads configuration, runs the lexer over a source file and prints the
//! resulting token stream, one token per line:
//!
//! ```text
//! 2:1 name "fib"
//! 2:5 assign
//! 3:3 open_level
//! ```
//!
//! Positions are printed one-based as `row:column`.

use std::io::{self, Write};

use koi_lex::{tokenize_with, LexerConfig, Token};
use koi_par::TokenWalker;
use tracing::debug;

pub mod config;
pub mod error;

pub use config::{Config, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};

/// Writes every token of `source` to `out`, up to and including `eof`.
///
/// Returns the number of tokens written. Tokens before a lexical error are
/// written before the error is returned. An invalid `lexer` configuration
/// fails before anything is written.
pub fn emit_tokens<W: Write>(source: &str, lexer: &LexerConfig, out: &mut W) -> Result<usize> {
    let mut walker = TokenWalker::new(tokenize_with(source, lexer)?);
    let mut count = 0;

    loop {
        let token = walker.forward(None)?;
        write_token(out, &token)?;
        count += 1;
        if token.is_eof() {
            break;
        }
    }

    out.flush()?;
    debug!(count, "tokens written");
    Ok(count)
}

fn write_token<W: Write>(out: &mut W, token: &Token) -> io::Result<()> {
    match &token.value {
        Some(value) => writeln!(out, "{} {} {}", token.position, token.kind, value),
        None => writeln!(out, "{} {}", token.position, token.kind),
    }
}
