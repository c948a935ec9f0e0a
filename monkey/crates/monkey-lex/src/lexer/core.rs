//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use std::iter::FusedIterator;

use monkey_util::Span;

use crate::chars::{is_digit, is_letter, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the Monkey programming language.
///
/// The lexer hands out one [`Token`] per call to
/// [`next_token`](Lexer::next_token) until the input is exhausted, then
/// keeps returning the same end-of-input token. Unrecognized bytes come
/// back in-band as [`TokenKind::Illegal`]; lexing never fails.
///
/// # Example
///
/// ```
/// use monkey_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
///
/// let five = lexer.next_token();
/// assert_eq!(five.kind, TokenKind::Ident);
/// assert_eq!(five.literal, "five");
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Byte cursor over the input.
    pub(super) cursor: Cursor<'a>,

    /// Illegal tokens produced so far.
    illegal_count: usize,

    /// Set once the iterator has yielded its last token.
    finished: bool,
}

/// Where the token being lexed started.
#[derive(Clone, Copy, Debug)]
pub(super) struct TokenStart {
    pub(super) offset: usize,
    pub(super) line: u32,
    pub(super) column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        tracing::trace!(len = source.len(), "creating lexer");
        Self {
            cursor: Cursor::new(source),
            illegal_count: 0,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then dispatches on the current byte. Operator and
    /// delimiter arms leave the cursor on their last byte and share the
    /// single advance after the match; identifiers and integers consume
    /// their whole run and return directly.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.token_start();

        let Some(byte) = self.cursor.current() else {
            return Token::eof(Span::point(start.offset, start.line, start.column));
        };

        let kind = match byte {
            b'=' => self.lex_equals(),
            b'!' => self.lex_bang(),
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b if is_letter(b) => return self.lex_identifier(start),
            b if is_digit(b) => return self.lex_number(start),
            _ => TokenKind::Illegal,
        };

        self.cursor.advance();
        self.finish_token(kind, start)
    }

    /// Returns the number of illegal tokens produced so far.
    pub fn illegal_count(&self) -> usize {
        self.illegal_count
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    fn token_start(&self) -> TokenStart {
        TokenStart {
            offset: self.cursor.position(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }

    /// Builds a token from `start` up to the cursor.
    pub(super) fn finish_token(&mut self, kind: TokenKind, start: TokenStart) -> Token {
        let literal = self.cursor.slice_from(start.offset);
        let span = Span::new(
            start.offset,
            self.cursor.position(),
            start.line,
            start.column,
        );

        if kind == TokenKind::Illegal {
            self.illegal_count += 1;
            tracing::trace!(
                line = start.line,
                column = start.column,
                literal,
                "illegal character"
            );
        }

        Token::new(kind, literal, span)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, end-of-input.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}
