//! Byte classes recognized by the lexer.
//!
//! Monkey identifiers are ASCII-only and digits never continue an
//! identifier, so `x1` scans as `x` followed by `1`.

/// Checks if a byte can start or continue an identifier.
///
/// Letters `a-z`, `A-Z` and the underscore.
///
/// ```
/// use monkey_lex::chars::is_letter;
///
/// assert!(is_letter(b'a'));
/// assert!(is_letter(b'_'));
/// assert!(!is_letter(b'1'));
/// ```
#[inline]
pub const fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte is an ASCII decimal digit.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte is whitespace the lexer skips between tokens.
///
/// Only space, tab, newline, and carriage return. Form feed and vertical
/// tab are illegal bytes.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
