//! Character and string literal lexing.
//!
//! Neither literal has escape sequences. A char literal holds exactly one
//! character between single quotes; a string runs to the next double quote,
//! newlines included.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a character literal such as `'a'`.
    ///
    /// The token's lexeme is the character itself, without quotes. When the
    /// closing quote is missing, the partial token holds the consumed text,
    /// opening quote included (`'` or `'c`).
    pub(super) fn lex_char(&mut self) -> LexResult<Token> {
        self.cursor.advance(); // opening '

        if self.cursor.is_at_end() {
            return Err(self.unterminated_char());
        }

        let c = self.cursor.current_char();
        self.cursor.advance();

        if !self.cursor.match_char('\'') {
            return Err(self.unterminated_char());
        }

        Ok(Token::new(TokenKind::CharLiteral, c.to_string()))
    }

    fn unterminated_char(&self) -> crate::Malformed {
        let consumed = self.cursor.slice_from(self.token_start);
        self.malformed(
            Token::new(TokenKind::CharLiteral, consumed),
            LexError::UnterminatedChar,
        )
    }

    /// Lexes a string literal such as `"hello"`.
    ///
    /// The token's lexeme is the text between the quotes. An unterminated
    /// string consumes the rest of the input and its partial token holds
    /// that content.
    pub(super) fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance(); // opening "

        let content_start = self.cursor.position();
        self.cursor.advance_while(|c| c != '"');
        let token = Token::new(
            TokenKind::StringLiteral,
            self.cursor.slice_from(content_start),
        );

        if self.cursor.is_at_end() {
            return Err(self.malformed(token, LexError::UnterminatedString));
        }

        self.cursor.advance(); // closing "
        Ok(token)
    }
}
