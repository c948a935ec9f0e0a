//! monkey-lex - Lexical Analyzer for the Monkey Programming Language
//!
//! This crate turns Monkey source text into a stream of classified tokens
//! for a downstream parser. It is pull-based: the caller asks for one token
//! at a time until it sees [`TokenKind::Eof`].
//!
//! # Example Usage
//!
//! ```
//! use monkey_lex::{Lexer, TokenKind};
//!
//! let source = "let five = 5;";
//!
//! // Get tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//!
//! // Or iterate; the iterator stops before end-of-input
//! let literals: Vec<String> = Lexer::new(source).map(|t| t.literal).collect();
//! assert_eq!(literals, ["let", "five", "=", "5", ";"]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens, and the reserved-word table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor for source traversal
//! - [`chars`] - Byte classes for identifiers, digits, and whitespace
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_]+`. Digits do not continue an identifier.
//!
//! ## Literals
//!
//! - **Integer**: `[0-9]+`, kept verbatim as text
//!
//! ## Operators
//!
//! `=`, `+`, `-`, `!`, `*`, `/`, `<`, `>`, `==`, `!=`
//!
//! ## Delimiters
//!
//! `,`, `;`, `(`, `)`, `{`, `}`
//!
//! ## Special
//!
//! - **EOF**: End of input, empty literal
//! - **Illegal**: Anything else, one token per unrecognized character

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, lookup_identifier, Token, TokenKind, KEYWORDS};

/// Tokenizes a whole source, including the trailing end-of-input token.
///
/// ```
/// use monkey_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[1].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
