//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `operator` - One- or two-character operator lookahead

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Lexer;
