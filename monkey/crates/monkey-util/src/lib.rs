//! monkey-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the Monkey toolchain crates:
//!
//! - [`span`] - byte ranges with line/column information, and
//!   [`SourceFile`] for turning them back into source lines
//! - [`error`] - error types for the operations in this crate
//!
//! The lexer depends on this crate for [`Span`]; anything downstream that
//! reports locations (a parser, the `monkt` tool) uses [`SourceFile`].

#![warn(missing_docs)]

pub mod error;
pub mod span;

pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
