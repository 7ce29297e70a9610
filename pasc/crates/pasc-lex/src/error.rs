//! Lexical error types.
//!
//! None of these stop a scan. Malformed literals come back as a
//! [`Malformed`] value carrying the partial token; unrecognized characters
//! are skipped and recorded.

use pasc_util::{DiagnosticCode, Level, Span};
use thiserror::Error;

use crate::token::Token;

/// A recoverable problem found while scanning
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token
    #[error("unrecognized character '{0}'")]
    UnrecognizedChar(char),

    /// A `'` literal without its closing quote
    #[error("unterminated character literal")]
    UnterminatedChar,

    /// A `"` literal without its closing quote
    #[error("unterminated string literal")]
    UnterminatedString,

    /// An `e`/`E` exponent marker with no digits after it
    #[error("missing digits after exponent in '{lexeme}'")]
    MissingExponentDigits {
        /// The consumed number text
        lexeme: String,
    },
}

impl LexError {
    /// Diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnrecognizedChar(_) => DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR,
            LexError::UnterminatedChar => DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::MissingExponentDigits { .. } => DiagnosticCode::E_LEXER_MISSING_EXPONENT,
        }
    }

    /// Severity reported for this error.
    ///
    /// Skipped characters are warnings; literals that produced only a
    /// partial token are errors.
    pub fn level(&self) -> Level {
        match self {
            LexError::UnrecognizedChar(_) => Level::Warning,
            _ => Level::Error,
        }
    }

    /// A fix-it hint for the diagnostic, if there is an obvious one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnrecognizedChar(_) => None,
            LexError::UnterminatedChar => Some("character literals hold exactly one character: 'c'"),
            LexError::UnterminatedString => Some("add a closing `\"`"),
            LexError::MissingExponentDigits { .. } => Some("write the exponent as digits, e.g. 1e10"),
        }
    }
}

/// A literal that could not be completed.
///
/// `partial` is the token built from what was consumed, so the caller can
/// keep going with it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{error} at {span}")]
pub struct Malformed {
    /// The token built from the consumed text
    pub partial: Token,
    /// What went wrong
    #[source]
    pub error: LexError,
    /// Where the literal starts
    pub span: Span,
}

impl Malformed {
    /// Creates a malformed-literal result.
    pub fn new(partial: Token, error: LexError, span: Span) -> Self {
        Self {
            partial,
            error,
            span,
        }
    }

    /// Discards the error and keeps the partial token.
    pub fn into_partial(self) -> Token {
        self.partial
    }
}

/// Result type alias for a single scanned token
pub type LexResult<T> = std::result::Result<T, Malformed>;
