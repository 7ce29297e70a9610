//! Diagnostic codes for categorizing lexical errors and warnings.
//!
//! # Examples
//!
//! ```
//! use pasc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1003);
//! assert_eq!(code.as_str(), "E1003");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}`: the prefix is "E" for errors
/// or "W" for warnings and the number is zero-padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1002", "W1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER CODES (1000-1999)
    // =========================================================================

    /// W1001: Lexer - Unrecognized character skipped
    pub const W_LEXER_UNRECOGNIZED_CHAR: Self = Self::new("W", 1001);
    /// E1002: Lexer - Unterminated character literal
    pub const E_LEXER_UNTERMINATED_CHAR: Self = Self::new("E", 1002);
    /// E1003: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1003);
    /// E1004: Lexer - Exponent marker without digits
    pub const E_LEXER_MISSING_EXPONENT: Self = Self::new("E", 1004);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
