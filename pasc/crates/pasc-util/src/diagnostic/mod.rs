//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The scanner never stops on bad input; it reports what it found through a
//! [`Handler`] and keeps going. Callers inspect the handler once the run is
//! over.
//!
//! # Examples
//!
//! ```
//! use pasc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use pasc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

/// Renders the header line, e.g. `error[E1003]: unterminated string literal at 3:7`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if self.span != Span::DUMMY {
            write!(f, " at {}", self.span)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// # Examples
///
/// ```
/// use pasc_util::diagnostic::{Diagnostic, Handler};
/// use pasc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("unrecognized character '#'", Span::DUMMY));
///
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count_where(Level::is_error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count_where(Level::is_warning)
    }

    fn count_where(&self, predicate: impl Fn(&Level) -> bool) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| predicate(&d.level))
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
