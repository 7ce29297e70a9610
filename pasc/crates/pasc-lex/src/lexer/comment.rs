//! Comment skipping.

use tracing::debug;

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a `/* ... */` block comment.
    ///
    /// Comments do not nest: the first `*/` closes it. A comment that is
    /// never closed runs to the end of the input without a diagnostic.
    pub(super) fn skip_block_comment(&mut self) {
        let line = self.cursor.line();
        self.cursor.advance_n(2); // "/*"

        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                debug!(line, "skipped block comment");
                return;
            }
            self.cursor.advance();
        }

        debug!(line, "unterminated block comment runs to end of input");
    }
}
