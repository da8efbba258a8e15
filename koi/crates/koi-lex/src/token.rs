//! Token definitions for the Koi lexer.
//!
//! A [`Token`] is an immutable `(kind, position, value)` triple. Every stage
//! of the pipeline produces tokens of this one type; earlier stages use the
//! structural kinds (`line`, `string`, `eof`, ...) and the word splitter
//! produces the terminal kinds consumed by the parser.

use std::fmt;

/// A zero-based location in the original source text.
///
/// `row` counts physical lines from 0 and `column` counts characters from the
/// start of that line. Positions order by row, then column.
///
/// # Example
///
/// ```
/// use koi_lex::Position;
///
/// let pos = Position::new(1, 4);
/// assert_eq!(pos.offset(2), Position::new(1, 6));
/// assert_eq!(pos.to_string(), "2:5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Physical line, starting at 0.
    pub row: usize,
    /// Character offset within the line, starting at 0.
    pub column: usize,
}

impl Position {
    /// Creates a position from a zero-based row and column.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the position `columns` characters further along the same row.
    #[inline]
    pub const fn offset(self, columns: usize) -> Self {
        Self::new(self.row, self.column + columns)
    }
}

impl fmt::Display for Position {
    /// One-based `row:column`, for humans.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row + 1, self.column + 1)
    }
}

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural kinds produced by the line-level stages
    /// A physical line, or a fragment of one.
    Line,
    /// End of input. Always the last token of a stream.
    Eof,
    /// A string literal's contents, without delimiters.
    String,
    /// Start of a nested indentation block.
    OpenLevel,
    /// End of a nested indentation block.
    CloseLevel,

    // Words
    /// Identifier.
    Name,
    /// Integer literal.
    Int,

    // Keywords
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `return`
    Return,

    // Multi-character operators
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `->`
    Arrow,

    // Single-character operators and punctuation
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
}

impl TokenKind {
    /// Stable snake_case name of the kind, as printed by the driver.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Line => "line",
            TokenKind::Eof => "eof",
            TokenKind::String => "string",
            TokenKind::OpenLevel => "open_level",
            TokenKind::CloseLevel => "close_level",
            TokenKind::Name => "name",
            TokenKind::Int => "int",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::Equal => "equal",
            TokenKind::NotEqual => "not_equal",
            TokenKind::LessEqual => "less_equal",
            TokenKind::GreaterEqual => "greater_equal",
            TokenKind::Arrow => "arrow",
            TokenKind::Assign => "assign",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Star => "star",
            TokenKind::Slash => "slash",
            TokenKind::Percent => "percent",
            TokenKind::Less => "less",
            TokenKind::Greater => "greater",
            TokenKind::Comma => "comma",
            TokenKind::Colon => "colon",
            TokenKind::Dot => "dot",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::LBracket => "lbracket",
            TokenKind::RBracket => "rbracket",
        }
    }

    /// Returns true for the kinds that only mark block structure.
    pub fn is_structural(self) -> bool {
        matches!(self, TokenKind::OpenLevel | TokenKind::CloseLevel)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words, checked in order before identifiers.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("return", TokenKind::Return),
];

/// Operators spelled with more than one character. Checked before
/// [`SINGLE_CHAR_OPERATORS`] so that `==` never lexes as two `=`.
pub const MULTI_CHAR_OPERATORS: &[(&str, TokenKind)] = &[
    ("==", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("->", TokenKind::Arrow),
];

/// Single-character operators and punctuation.
pub const SINGLE_CHAR_OPERATORS: &[(char, TokenKind)] = &[
    ('=', TokenKind::Assign),
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Star),
    ('/', TokenKind::Slash),
    ('%', TokenKind::Percent),
    ('<', TokenKind::Less),
    ('>', TokenKind::Greater),
    (',', TokenKind::Comma),
    (':', TokenKind::Colon),
    ('.', TokenKind::Dot),
    ('(', TokenKind::LParen),
    (')', TokenKind::RParen),
    ('[', TokenKind::LBracket),
    (']', TokenKind::RBracket),
];

/// Payload carried by a token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// Raw text: a line, a line fragment, string contents or a name.
    Text(String),
    /// A parsed integer literal.
    Int(u64),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{:?}", text),
            TokenValue::Int(value) => write!(f, "{}", value),
        }
    }
}

/// A single lexical unit.
///
/// Tokens are never mutated once produced; stages that need a different
/// value or position build a new token.
///
/// # Example
///
/// ```
/// use koi_lex::{Position, Token, TokenKind};
///
/// let token = Token::with_text(TokenKind::Name, Position::new(0, 4), "fib");
/// assert_eq!(token.text(), Some("fib"));
/// assert_eq!(token.to_string(), "name \"fib\" at 1:5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What this token is.
    pub kind: TokenKind,
    /// Location of the token's first character in the original source.
    pub position: Position,
    /// Optional payload.
    pub value: Option<TokenValue>,
}

impl Token {
    /// Creates a token without a value.
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self {
            kind,
            position,
            value: None,
        }
    }

    /// Creates a token carrying text.
    pub fn with_text(kind: TokenKind, position: Position, text: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            value: Some(TokenValue::Text(text.into())),
        }
    }

    /// Creates an `int` token.
    pub fn with_int(position: Position, value: u64) -> Self {
        Self {
            kind: TokenKind::Int,
            position,
            value: Some(TokenValue::Int(value)),
        }
    }

    /// Shorthand for a `line` token.
    pub fn line(position: Position, text: impl Into<String>) -> Self {
        Self::with_text(TokenKind::Line, position, text)
    }

    /// Returns the text payload, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Consumes the token, returning its text payload, if any.
    pub fn into_text(self) -> Option<String> {
        match self.value {
            Some(TokenValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    pub fn int(&self) -> Option<u64> {
        match self.value {
            Some(TokenValue::Int(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns true if this is the end-of-input sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {} at {}", self.kind, value, self.position),
            None => write!(f, "{} at {}", self.kind, self.position),
        }
    }
}
