//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for rendering the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// # Examples
///
/// ```
/// use pasc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x := 'a;", 1, 6, 8);
/// let formatted = snippet.format();
/// assert!(formatted.contains("x := 'a;"));
/// assert!(formatted.ends_with("|      ^^"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Build the snippet for `span` out of the full source text
    ///
    /// The highlight is clipped to the span's first line. Returns `None` for
    /// spans without a line (such as [`Span::DUMMY`]) or past the last line.
    ///
    /// # Examples
    ///
    /// ```
    /// use pasc_util::{SourceSnippet, Span};
    ///
    /// let source = "begin\n  x := \"abc\nend.";
    /// let snippet = SourceSnippet::from_source(source, Span::new(13, 18, 2, 8)).unwrap();
    /// assert_eq!(snippet.line, "  x := \"abc");
    /// assert_eq!(snippet.start_column, 8);
    /// assert_eq!(snippet.end_column, 12);
    /// ```
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        if span.line == 0 {
            return None;
        }
        let line = source.lines().nth(span.line as usize - 1)?;
        let start_column = span.column as usize;
        let line_chars = line.chars().count();
        let span_chars = span
            .source_text(source)
            .map(|text| text.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0);
        let end_column = (start_column + span_chars).min(line_chars + 1);

        Some(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the numbered source line followed by a caret line pointing at
    /// the highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

/// Fluent builder for [`Diagnostic`]s
///
/// # Examples
///
/// ```
/// use pasc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Level, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::warning("unrecognized character '@'")
///     .code(DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR)
///     .span(Span::new(2, 3, 1, 3))
///     .emit(&handler);
///
/// assert_eq!(handler.warning_count(), 1);
/// assert_eq!(handler.diagnostics()[0].level, Level::Warning);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic with the given level and message
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Finish building and hand the diagnostic to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_snippet_format_empty_range_has_one_caret() {
        let formatted = SourceSnippet::new("a @ b", 1, 3, 3).format();
        let caret_line = formatted.lines().nth(1).unwrap();
        assert_eq!(caret_line, "    |   ^");
    }

    #[test]
    fn test_source_snippet_from_source_second_line() {
        let source = "program p;\nx := 'a;\n";
        let snippet = SourceSnippet::from_source(source, Span::new(16, 18, 2, 6)).unwrap();
        assert_eq!(snippet.line, "x := 'a;");
        assert_eq!(snippet.line_number, 2);
        assert_eq!(snippet.start_column, 6);
        assert_eq!(snippet.end_column, 8);
    }

    #[test]
    fn test_source_snippet_from_source_clips_multiline_span() {
        let source = "s := \"abc\ndef";
        let snippet = SourceSnippet::from_source(source, Span::new(5, 13, 1, 6)).unwrap();
        assert_eq!(snippet.line, "s := \"abc");
        assert_eq!(snippet.end_column, 10);
    }

    #[test]
    fn test_source_snippet_from_source_dummy_span() {
        assert!(SourceSnippet::from_source("x", Span::DUMMY).is_none());
    }

    #[test]
    fn test_builder_error() {
        let diag = DiagnosticBuilder::error("test error").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test error");
        assert_eq!(diag.span, Span::DUMMY);
    }

    #[test]
    fn test_builder_fluent() {
        let diag = DiagnosticBuilder::error("unterminated character literal")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_CHAR)
            .span(Span::new(0, 2, 1, 1))
            .note("character literals hold exactly one character")
            .help("add a closing `'`")
            .build();

        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_CHAR));
        assert_eq!(diag.span.len(), 2);
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.helps, vec!["add a closing `'`"]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("test error").emit(&handler);

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }
}
