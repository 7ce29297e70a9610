//! One-token lookback.
//!
//! Two characters change meaning depending on the token before them: `-`
//! (sign or subtraction) and `.` (end of program or plain dot). The scanner
//! keeps only the part of the previous token those rules need.

use crate::token::{Token, TokenKind};

/// What the scanner remembers about the last token it emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lookback {
    /// Nothing emitted yet
    #[default]
    Start,
    /// An integer literal, real literal or identifier
    Operand,
    /// The reserved word `end`, spelled in lowercase
    EndKeyword,
    /// Any other token
    Other,
}

impl Lookback {
    /// The state after emitting `token`.
    ///
    /// # Example
    ///
    /// ```
    /// use pasc_lex::{Lookback, Token, TokenKind};
    ///
    /// let state = Lookback::after(&Token::new(TokenKind::Identifier, "x"));
    /// assert!(state.minus_is_operator());
    ///
    /// let state = Lookback::after(&Token::new(TokenKind::ReservedWord, "end"));
    /// assert!(state.dot_ends_program());
    /// ```
    pub fn after(token: &Token) -> Self {
        match token.kind {
            TokenKind::IntegerLiteral | TokenKind::RealLiteral | TokenKind::Identifier => {
                Lookback::Operand
            },
            TokenKind::ReservedWord if token.is_end_keyword() => Lookback::EndKeyword,
            _ => Lookback::Other,
        }
    }

    /// Whether a `-` here is always a subtraction operator.
    ///
    /// When false, `-` followed by a digit starts a negative number.
    #[inline]
    pub fn minus_is_operator(self) -> bool {
        self == Lookback::Operand
    }

    /// Whether a `.` here marks the end of the program.
    #[inline]
    pub fn dot_ends_program(self) -> bool {
        self == Lookback::EndKeyword
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(kind: TokenKind, lexeme: &str) -> Lookback {
        Lookback::after(&Token::new(kind, lexeme))
    }

    #[test]
    fn test_start_state() {
        let state = Lookback::default();
        assert_eq!(state, Lookback::Start);
        assert!(!state.minus_is_operator());
        assert!(!state.dot_ends_program());
    }

    #[test]
    fn test_operands() {
        assert_eq!(after(TokenKind::IntegerLiteral, "1"), Lookback::Operand);
        assert_eq!(after(TokenKind::RealLiteral, "1.5"), Lookback::Operand);
        assert_eq!(after(TokenKind::Identifier, "x"), Lookback::Operand);
    }

    #[test]
    fn test_end_keyword_is_exact() {
        assert_eq!(after(TokenKind::ReservedWord, "end"), Lookback::EndKeyword);
        assert_eq!(after(TokenKind::ReservedWord, "END"), Lookback::Other);
        assert_eq!(after(TokenKind::ReservedWord, "begin"), Lookback::Other);
    }

    #[test]
    fn test_everything_else_is_other() {
        let others = [
            (TokenKind::CharLiteral, "a"),
            (TokenKind::StringLiteral, "s"),
            (TokenKind::ArithmeticOperator, "+"),
            (TokenKind::RelationalOperator, "<"),
            (TokenKind::Assignment, ":="),
            (TokenKind::SpecialSymbol, ")"),
            (TokenKind::EndMarker, "."),
        ];
        for (kind, lexeme) in others {
            let state = after(kind, lexeme);
            assert_eq!(state, Lookback::Other, "{kind}");
            assert!(!state.minus_is_operator());
            assert!(!state.dot_ends_program());
        }
    }

    #[test]
    fn test_queries() {
        assert!(Lookback::Operand.minus_is_operator());
        assert!(!Lookback::EndKeyword.minus_is_operator());
        assert!(Lookback::EndKeyword.dot_ends_program());
        assert!(!Lookback::Operand.dot_ends_program());
    }
}
