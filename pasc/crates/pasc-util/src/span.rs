//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token or diagnostic came from: the byte range
//! in the source plus the human-readable line and column of its start.
//!
//! # Examples
//!
//! ```
//! use pasc_util::span::Span;
//!
//! let span = Span::new(10, 20, 2, 5);
//! assert_eq!(span.len(), 10);
//! assert_eq!(span.to_string(), "2:5");
//! ```

use std::fmt;

/// Source location span
///
/// - Byte offsets (`start..end`) into the source text
/// - Line and column numbers (1-based) of the start, for display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing and for diagnostics without a location
    ///
    /// # Examples
    ///
    /// ```
    /// use pasc_util::span::Span;
    ///
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a span from a byte range and the line/column of its start
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a line/column position
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if `offset` lies inside the span
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns the slice of `source` this span covers, if it is in bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use pasc_util::span::Span;
    ///
    /// let span = Span::new(4, 9, 1, 5);
    /// assert_eq!(span.source_text("var total: integer;"), Some("total"));
    /// ```
    pub fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
