//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains a single,
//! forward-only read position over the source text. It handles UTF-8
//! correctly and tracks line/column information for diagnostics.

/// A forward-only cursor over source text.
///
/// Lookahead is bounded to a couple of characters; the cursor never moves
/// backwards.
///
/// # Example
///
/// ```
/// use pasc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x := 1;");
///
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source. Callers that
    /// must tell a literal NUL apart from the end use [`Cursor::is_at_end`].
    ///
    /// # Example
    ///
    /// ```
    /// use pasc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("begin");
    /// assert_eq!(cursor.current_char(), 'b');
    /// assert_eq!(Cursor::new("").current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one.
    ///
    /// # Example
    ///
    /// ```
    /// use pasc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=");
    /// assert_eq!(cursor.peek_char(0), '<');
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by the given number of characters.
    ///
    /// # Example
    ///
    /// ```
    /// use pasc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("/* x */");
    /// cursor.advance_n(2);
    /// assert_eq!(cursor.current_char(), ' ');
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use pasc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(":=");
    /// assert!(cursor.match_char(':'));
    /// assert!(!cursor.match_char(':'));
    /// assert_eq!(cursor.current_char(), '=');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips whitespace characters, including Unicode whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use pasc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \t\nvar");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'v');
    /// ```
    pub fn skip_whitespace(&mut self) {
        self.advance_while(is_blank);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use pasc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("end.");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "end");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

/// Returns true if `c` separates tokens.
///
/// Unicode whitespace minus the no-break spaces (U+00A0, U+2007, U+202F)
/// and NEL (U+0085), plus the information separators U+001C..=U+001F.
#[inline]
pub fn is_blank(c: char) -> bool {
    match c {
        '\u{001C}'..='\u{001F}' => true,
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}
