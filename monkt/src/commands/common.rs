//! Common types and utilities for monkt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations.

use std::io::Read;
use std::path::Path;

use monkey_util::SourceFile;

use crate::error::{MonktError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for printing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `KIND "literal"` line per token
    Text,
    /// One JSON array of tokens per input
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat.
    ///
    /// # Arguments
    /// * `s` - The string to parse (case-insensitive)
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Picks the format from the command line, falling back to the
    /// configured default.
    pub fn resolve(flag: Option<&str>, configured: &str) -> Result<Self> {
        match flag {
            Some(name) => Self::from_str(name).ok_or_else(|| {
                MonktError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
            }),
            None => Self::from_str(configured).ok_or_else(|| {
                MonktError::Config(format!(
                    "{} {}",
                    error_messages::INVALID_CONFIG_FORMAT,
                    configured
                ))
            }),
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Display name used for standard input in reports.
pub const STDIN_NAME: &str = "<stdin>";

/// Reads one input, where `-` means standard input.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if path.as_os_str() == STDIN_PATH {
        return read_source_from(STDIN_NAME, std::io::stdin().lock());
    }

    if !path.exists() {
        return Err(MonktError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(MonktError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let file = std::fs::File::open(path)?;
    read_source_from(path.display().to_string(), file)
}

/// Reads a whole input from `reader`.
///
/// Invalid UTF-8 is replaced with U+FFFD, which the lexer then reports as
/// an illegal character.
pub fn read_source_from<R: Read>(name: impl Into<String>, mut reader: R) -> Result<SourceFile> {
    let name = name.into();
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let content = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(file = %name, "input is not valid UTF-8; replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    tracing::debug!(file = %name, bytes = content.len(), "read input");
    Ok(SourceFile::new(name, content))
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";
}
