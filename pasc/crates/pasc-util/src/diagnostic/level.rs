//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use pasc_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert_eq!(Level::Warning.to_string(), "warning");
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// The scanner never aborts a run, so severity only decides how a diagnostic
/// is displayed and counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Malformed input that still produced (partial) output
    Error,
    /// Suspicious input that was skipped
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns true if this level represents a warning
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Returns the canonical name for this level
    ///
    /// # Examples
    ///
    /// ```
    /// use pasc_util::diagnostic::Level;
    ///
    /// assert_eq!(Level::Error.name(), "error");
    /// assert_eq!(Level::Help.name(), "help");
    /// ```
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }

    /// Returns the ANSI color code for this level
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",   // Red
            Level::Warning => "33", // Yellow
            Level::Note => "36",    // Cyan
            Level::Help => "32",    // Green
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
