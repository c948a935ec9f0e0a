//! Integer literal lexing.
//!
//! Only unsigned decimal integers exist. The literal keeps the digits
//! verbatim; converting them to a value is the parser's job.

use crate::chars::is_digit;
use crate::token::{Token, TokenKind};
use crate::Lexer;

use super::core::TokenStart;

impl Lexer<'_> {
    /// Lexes the maximal run of ASCII digits as an [`TokenKind::Int`].
    pub(super) fn lex_number(&mut self, start: TokenStart) -> Token {
        self.cursor.eat_while(is_digit);
        self.finish_token(TokenKind::Int, start)
    }
}
