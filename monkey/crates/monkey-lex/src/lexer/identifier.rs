//! Identifier and keyword lexing.

use crate::chars::is_letter;
use crate::token::{lookup_identifier, Token};
use crate::Lexer;

use super::core::TokenStart;

impl Lexer<'_> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the maximal run of letters and underscores, then checks the
    /// run against the reserved words. The cursor ends on the first byte
    /// after the run.
    pub(super) fn lex_identifier(&mut self, start: TokenStart) -> Token {
        self.cursor.eat_while(is_letter);
        let kind = lookup_identifier(self.cursor.slice_from(start.offset));
        self.finish_token(kind, start)
    }
}
