//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which keeps an explicit index
//! into the source and tracks line/column information for spans. End of
//! input is an index check, not a sentinel byte: a NUL inside the source is
//! just another byte.

/// A cursor over the bytes of a source string.
///
/// `position` always sits on a UTF-8 character boundary. Every byte the
/// lexer recognizes is ASCII, so [`advance`](Cursor::advance) steps one byte
/// for those and over the whole character otherwise.
///
/// # Example
///
/// ```
/// use monkey_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 5;");
///
/// assert_eq!(cursor.current(), Some(b'l'));
/// assert_eq!(cursor.peek(), Some(b'e'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(b'e'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the current character.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in bytes).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first byte of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte under the cursor, or `None` past the end.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.position).copied()
    }

    /// Returns the byte after the current one without moving.
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("=");
    /// assert_eq!(cursor.peek(), None);
    /// assert_eq!(cursor.position(), 0);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.position + 1).copied()
    }

    /// Returns the full character under the cursor.
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("é!");
    /// assert_eq!(cursor.current_char(), Some('é'));
    /// ```
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.position..)?.chars().next()
    }

    /// Moves past the current character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// cursor.advance();
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// assert_eq!(cursor.position(), 3);
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        let Some(b) = self.current() else {
            return;
        };

        // Fast path for ASCII (everything the lexer recognizes)
        let width = if b.is_ascii() {
            1
        } else {
            self.current_char().map_or(1, char::len_utf8)
        };

        self.position += width;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += width as u32;
        }
    }

    /// Advances while `predicate` accepts the current byte.
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123+4");
    /// cursor.eat_while(|b| b.is_ascii_digit());
    /// assert_eq!(cursor.current(), Some(b'+'));
    /// ```
    #[inline]
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while self.current().is_some_and(&mut predicate) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.eat_while(|b| b.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_is_at_end() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.current_char(), None);
    }

    #[test]
    fn test_peek_does_not_move() {
        let cursor = Cursor::new("==");
        assert_eq!(cursor.peek(), Some(b'='));
        assert_eq!(cursor.peek(), Some(b'='));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        let (pos, line, col) = (cursor.position(), cursor.line(), cursor.column());
        cursor.advance();
        cursor.advance();
        assert_eq!((cursor.position(), cursor.line(), cursor.column()), (pos, line, col));
    }

    #[test]
    fn test_interior_nul_is_not_end() {
        let mut cursor = Cursor::new("a\0b");
        cursor.advance();
        assert!(!cursor.is_at_end());
        assert_eq!(cursor.current(), Some(0));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'b'));
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd\r\ne");
        let mut seen = Vec::new();
        while !cursor.is_at_end() {
            seen.push((cursor.line(), cursor.column()));
            cursor.advance();
        }
        assert_eq!(
            seen,
            vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3), (2, 4), (3, 1)]
        );
    }

    #[test]
    fn test_multibyte_advance_stays_on_boundary() {
        let mut cursor = Cursor::new("€x");
        cursor.advance();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.current(), Some(b'x'));
        assert_eq!(cursor.column(), 4);
        assert_eq!(cursor.slice_from(0), "€");
    }

    #[test]
    fn test_eat_while_stops_at_end() {
        let mut cursor = Cursor::new("abc");
        cursor.eat_while(|b| b.is_ascii_alphabetic());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.slice_from(0), "abc");
    }

    #[test]
    fn test_slice_from_empty_range() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.slice_from(0), "");
    }
}
