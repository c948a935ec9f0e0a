//! Span module - Source location tracking.
//!
//! Every token the lexer hands out carries a [`Span`]: the half-open byte
//! range it was cut from, plus the line and column where it starts.
//!
//! # Examples
//!
//! ```
//! use monkey_util::span::Span;
//!
//! // `five` in `let five = 5;`
//! let span = Span::new(4, 8, 1, 5);
//! assert_eq!(span.len(), 4);
//! assert_eq!(span.to_string(), "1:5");
//! ```

mod source_map;

pub use source_map::SourceFile;

use std::fmt;

/// Source location span
///
/// A `Span` covers the bytes `start..end` of one source text. `line` and
/// `column` are 1-based and describe `start`; the column counts bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number of `start` (1-based)
    /// * `column` - Column number of `start` (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span sitting at `offset`.
    ///
    /// The end-of-input token uses this.
    ///
    /// ```
    /// use monkey_util::span::Span;
    ///
    /// let point = Span::point(13, 1, 14);
    /// assert_eq!(point.start, point.end);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
