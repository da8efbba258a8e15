//! Character classes used by the word splitter.

/// Checks if a character can start an identifier: a letter or `_`.
///
/// ```
/// use koi_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue an identifier: a letter, digit or `_`.
///
/// ```
/// use koi_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('+'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character ends a line.
///
/// Besides `\n` and `\r` this covers the vertical tab, form feed, the file,
/// group and record separators, next line, and the Unicode line and paragraph
/// separators. `\r\n` is a single terminator; see [`crate::pass::LineSplitter`].
///
/// ```
/// use koi_lex::unicode::is_line_terminator;
///
/// assert!(is_line_terminator('\n'));
/// assert!(is_line_terminator('\u{2028}'));
/// assert!(!is_line_terminator('\t'));
/// ```
pub fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n'
            | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Checks if a character is a digit in the given base.
///
/// # Arguments
///
/// * `c` - The character to check
/// * `base` - 2, 8, 10 or 16
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    c.is_digit(base)
}

/// Returns the radix selected by the character after a leading `0`, if any.
pub fn radix_for_prefix(c: char) -> Option<u32> {
    match c {
        'x' | 'X' => Some(16),
        'o' | 'O' => Some(8),
        'b' | 'B' => Some(2),
        _ => None,
    }
}
