//! Operator lexing.
//!
//! Only `=` and `!` can begin a two-character operator. Both peek at the
//! next byte and, on a match, step onto it so the dispatcher's trailing
//! advance moves past the whole operator.

use crate::token::TokenKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes assignment or equality.
    ///
    /// Handles: `=`, `==`
    pub(super) fn lex_equals(&mut self) -> TokenKind {
        self.either(b'=', TokenKind::Eq, TokenKind::Assign)
    }

    /// Lexes bang or inequality.
    ///
    /// Handles: `!`, `!=`
    pub(super) fn lex_bang(&mut self) -> TokenKind {
        self.either(b'=', TokenKind::NotEq, TokenKind::Bang)
    }

    fn either(&mut self, second: u8, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.peek() == Some(second) {
            self.cursor.advance();
            double
        } else {
            single
        }
    }
}
