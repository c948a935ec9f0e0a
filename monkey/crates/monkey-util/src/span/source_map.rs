//! Source files and line lookup.
//!
//! [`SourceFile`] keeps a named source text together with the byte offsets
//! of its line starts, so spans can be turned back into readable locations.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use monkey_util::span::SourceFile;
///
/// let file = SourceFile::new("main.mk", "let five = 5;");
/// assert_eq!(file.name(), "main.mk");
/// assert_eq!(file.content(), "let five = 5;");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name, path, or a display name such as `<stdin>`
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// An empty file has one (empty) line.
    ///
    /// ```
    /// use monkey_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.mk", "let x = 1;\nlet y = 2;\n");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (1-based line number)
    ///
    /// ```
    /// use monkey_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.mk", "line1\nline2");
    /// assert_eq!(file.line_start(1), Some(0));
    /// assert_eq!(file.line_start(2), Some(6));
    /// assert_eq!(file.line_start(3), None);
    /// ```
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|index| self.line_starts.get(index).copied())
    }

    /// Get a specific source line (1-based), without its line terminator
    ///
    /// ```
    /// use monkey_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.mk", "let a = 1;\r\nlet b = 2;");
    /// assert_eq!(file.line_at(1), Some("let a = 1;"));
    /// assert_eq!(file.line_at(2), Some("let b = 2;"));
    /// assert_eq!(file.line_at(0), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = self.line_start(line)?;
        let end = self.line_start(line + 1).unwrap_or(self.content.len());
        self.content
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Errors
    ///
    /// Fails when `start > end`, when `end` runs past the content, or when
    /// either offset splits a UTF-8 character.
    ///
    /// ```
    /// use monkey_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.mk", "let five = 5;");
    /// assert_eq!(file.extract_range(4, 8).unwrap(), "five");
    /// assert!(file.extract_range(8, 4).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        for offset in [start, end] {
            if !self.content.is_char_boundary(offset) {
                return Err(SourceMapError::NotCharBoundary { offset });
            }
        }

        Ok(&self.content[start..end])
    }

    /// Render the line holding `span` with a caret underline beneath it.
    ///
    /// Returns `None` if the span's line does not exist in this file.
    ///
    /// ```
    /// use monkey_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("a.mk", "let x = @;");
    /// let snippet = file.snippet(Span::new(8, 9, 1, 9)).unwrap();
    /// assert!(snippet.contains("let x = @;"));
    /// assert!(snippet.ends_with("        ^"));
    /// ```
    pub fn snippet(&self, span: Span) -> Option<String> {
        let line_no = span.line as usize;
        let line = self.line_at(line_no)?;
        let line_start = self.line_start(line_no)?;
        let width = self.line_count().to_string().len().max(3);

        // Span columns count bytes; the rendered line is laid out in chars.
        let prefix_end = span.start.clamp(line_start, line_start + line.len());
        let indent = self
            .extract_range(line_start, prefix_end)
            .map(|prefix| prefix.chars().count())
            .unwrap_or_else(|_| (span.column as usize).saturating_sub(1));
        let underline = self
            .extract_range(span.start, span.end)
            .map(|text| text.chars().count())
            .unwrap_or_else(|_| span.len())
            .max(1);

        Some(format!(
            "{:>width$} | {}\n{:>width$} | {}{}",
            span.line,
            line,
            "",
            " ".repeat(indent),
            "^".repeat(underline),
        ))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
