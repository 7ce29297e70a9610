//! Operator and punctuation lexing.

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `-` as either a subtraction operator or the sign of a number.
    ///
    /// After an operand `-` is always an operator, so `x-1` is three tokens.
    /// Anywhere else a digit right after the `-` makes it part of the
    /// number, so `(-1)` holds the literal `-1`.
    pub(super) fn lex_minus(&mut self) -> LexResult<Token> {
        if !self.lookback.minus_is_operator() && self.cursor.peek_char(1).is_ascii_digit() {
            return self.lex_number();
        }

        self.cursor.advance();
        Ok(Token::new(TokenKind::ArithmeticOperator, "-"))
    }

    /// Lexes a fixed operator or punctuation symbol starting with `c`.
    ///
    /// Returns `None` if `c` starts no symbol; the cursor is left untouched
    /// in that case.
    pub(super) fn lex_symbol(&mut self, c: char) -> Option<Token> {
        let next = self.cursor.peek_char(1);

        let (kind, lexeme) = match c {
            '(' => (TokenKind::SpecialSymbol, "("),
            ')' => (TokenKind::SpecialSymbol, ")"),
            ';' => (TokenKind::SpecialSymbol, ";"),
            ',' => (TokenKind::SpecialSymbol, ","),
            '.' if self.lookback.dot_ends_program() => (TokenKind::EndMarker, "."),
            '.' => (TokenKind::SpecialSymbol, "."),
            ':' if next == '=' => (TokenKind::Assignment, ":="),
            ':' => (TokenKind::SpecialSymbol, ":"),
            '+' => (TokenKind::ArithmeticOperator, "+"),
            '*' => (TokenKind::ArithmeticOperator, "*"),
            '/' => (TokenKind::ArithmeticOperator, "/"),
            '=' => (TokenKind::RelationalOperator, "="),
            '<' if next == '=' => (TokenKind::RelationalOperator, "<="),
            '<' if next == '>' => (TokenKind::RelationalOperator, "<>"),
            '<' => (TokenKind::RelationalOperator, "<"),
            '>' if next == '=' => (TokenKind::RelationalOperator, ">="),
            '>' => (TokenKind::RelationalOperator, ">"),
            _ => return None,
        };

        self.cursor.advance_n(lexeme.len());
        Some(Token::new(kind, lexeme))
    }
}
