//! Error handling module for the monkt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. Lexical problems are not
//! errors here: the lexer reports them in-band as illegal tokens, and only
//! `check` turns them into a failure.

use thiserror::Error;

/// Main error type for the monkt CLI application.
#[derive(Error, Debug)]
pub enum MonktError {
    /// Error when the configuration cannot be found, read, or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// `check` found illegal characters.
    #[error("{count} illegal character(s) found")]
    IllegalTokens {
        /// Total across all checked inputs.
        count: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MonktError.
pub type Result<T> = std::result::Result<T, MonktError>;
