//! Number literal lexing.
//!
//! This module handles integer and real literals, including scientific
//! notation.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Grammar: `['-'] digit+ ['.' digit+] [('e'|'E') ['+'|'-'] digit*]`.
    /// A leading `-` is only present when the caller already decided it is a
    /// sign. The `.` is taken only when a digit follows it, so `12.` lexes as
    /// `12` followed by a dot.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `-7`
    /// - Real: `3.14`, `1e10`, `2.5E-3`
    ///
    /// # Returns
    ///
    /// An `IntegerLiteral` or `RealLiteral` token. An exponent marker with no
    /// digits after it is consumed and reported as
    /// [`LexError::MissingExponentDigits`], with the real literal as the
    /// partial token.
    pub(super) fn lex_number(&mut self) -> LexResult<Token> {
        let start = self.cursor.position();
        let mut is_real = false;

        self.cursor.match_char('-');
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            is_real = true;
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        let mut exponent_ok = true;
        if matches!(self.cursor.current_char(), 'e' | 'E') {
            is_real = true;
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            let digits_start = self.cursor.position();
            self.cursor.advance_while(|c| c.is_ascii_digit());
            exponent_ok = self.cursor.position() > digits_start;
        }

        let kind = if is_real {
            TokenKind::RealLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        let lexeme = self.cursor.slice_from(start);
        let token = Token::new(kind, lexeme);

        if exponent_ok {
            Ok(token)
        } else {
            let error = LexError::MissingExponentDigits {
                lexeme: lexeme.to_string(),
            };
            Err(self.malformed(token, error))
        }
    }
}
