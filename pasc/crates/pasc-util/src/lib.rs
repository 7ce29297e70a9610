//! pasc-util - Shared foundation types for the pasc crates
//!
//! This crate holds the pieces every phase of the pasc toolchain needs:
//! source locations ([`Span`]) and the diagnostic infrastructure used to
//! report problems without aborting a run ([`Diagnostic`], [`Handler`],
//! [`DiagnosticBuilder`]).
//!
//! # Example
//!
//! ```
//! use pasc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(4, 9, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::Span;
