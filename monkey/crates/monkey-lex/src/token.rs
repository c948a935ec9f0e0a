//! Token definitions for the Monkey language.
//!
//! This module defines the closed set of token kinds the lexer can produce,
//! the [`Token`] value handed to the parser, and the reserved-word table
//! used to tell keywords apart from ordinary identifiers.

use std::fmt;
use std::sync::LazyLock;

use monkey_util::{FxHashMap, Span};

/// The kind of a lexical token.
///
/// The set is closed: every token the lexer emits has exactly one of these
/// kinds. Literal payloads live on [`Token::literal`], never on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// A byte (or non-ASCII character) the lexer does not recognize
    Illegal,
    /// End of input
    Eof,

    // ===== Identifiers and literals =====
    /// Identifier: `add`, `foo_bar`
    Ident,
    /// Integer literal: `12345`
    Int,

    // ===== Operators =====
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    // ===== Delimiters =====
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // ===== Keywords =====
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl TokenKind {
    /// Canonical printable name of the kind.
    ///
    /// Operators and delimiters print as their lexeme, keywords in upper
    /// case (`fn` is `FUNCTION`), and the rest by role.
    ///
    /// ```
    /// use monkey_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::NotEq.as_str(), "!=");
    /// assert_eq!(TokenKind::Function.as_str(), "FUNCTION");
    /// assert_eq!(TokenKind::Ident.as_str(), "IDENT");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }

    /// Returns true for the reserved-word kinds.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Returns true for arithmetic, comparison, and assignment operators.
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Eq
                | TokenKind::NotEq
        )
    }

    /// Returns true for separators and brackets.
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words of the language.
///
/// Built once on first use and never mutated afterwards.
pub static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ]
    .into_iter()
    .collect()
});

/// Looks up a keyword by its exact spelling.
///
/// Returns `None` for anything that is not a reserved word. The match is
/// case-sensitive.
///
/// ```
/// use monkey_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("let"), Some(TokenKind::Let));
/// assert_eq!(keyword_from_ident("Let"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

/// Classifies an identifier-shaped run as keyword or plain identifier.
///
/// ```
/// use monkey_lex::{lookup_identifier, TokenKind};
///
/// assert_eq!(lookup_identifier("return"), TokenKind::Return);
/// assert_eq!(lookup_identifier("letx"), TokenKind::Ident);
/// ```
pub fn lookup_identifier(ident: &str) -> TokenKind {
    keyword_from_ident(ident).unwrap_or(TokenKind::Ident)
}

/// A token produced by the lexer.
///
/// `literal` is an owned copy of the exact source text the token was cut
/// from (empty for end-of-input), so tokens outlive the lexer and its input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// What sort of token this is.
    pub kind: TokenKind,
    /// Source text of the token.
    pub literal: String,
    /// Where the token sits in the source.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Creates an end-of-input token with an empty literal.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, String::new(), span)
    }

    /// Returns true if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}
