//! Edge case tests for pasc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, Token, TokenKind};
    use pasc_util::{DiagnosticCode, Handler};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        tokenize(source, &mut handler)
    }

    fn tok(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_letter() {
        assert_eq!(lex_all("x"), vec![tok(TokenKind::Identifier, "x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        assert_eq!(lex_all(&name), vec![tok(TokenKind::Identifier, &name)]);
    }

    #[test]
    fn test_edge_long_unrecognized_run() {
        let source = format!("{}x", "@".repeat(100_000));
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(&source, &mut handler);
        assert_eq!(lexer.next_token(), Some(tok(TokenKind::Identifier, "x")));
        assert_eq!(lexer.unrecognized().len(), 100_000);
    }

    #[test]
    fn test_edge_end_marker_only_after_end() {
        assert_eq!(
            lex_all("begin . end ."),
            vec![
                tok(TokenKind::ReservedWord, "begin"),
                tok(TokenKind::SpecialSymbol, "."),
                tok(TokenKind::ReservedWord, "end"),
                tok(TokenKind::EndMarker, "."),
            ]
        );
    }

    #[test]
    fn test_edge_dot_after_end_marker() {
        assert_eq!(
            lex_all("end.."),
            vec![
                tok(TokenKind::ReservedWord, "end"),
                tok(TokenKind::EndMarker, "."),
                tok(TokenKind::SpecialSymbol, "."),
            ]
        );
    }

    #[test]
    fn test_edge_end_inside_comment_does_not_arm_dot() {
        assert_eq!(
            lex_all("x /* end */ ."),
            vec![
                tok(TokenKind::Identifier, "x"),
                tok(TokenKind::SpecialSymbol, "."),
            ]
        );
    }

    #[test]
    fn test_edge_unrecognized_between_end_and_dot() {
        assert_eq!(
            lex_all("end@."),
            vec![
                tok(TokenKind::ReservedWord, "end"),
                tok(TokenKind::EndMarker, "."),
            ]
        );
    }

    #[test]
    fn test_edge_minus_after_keyword_is_sign() {
        assert_eq!(
            lex_all("then -1"),
            vec![
                tok(TokenKind::ReservedWord, "then"),
                tok(TokenKind::IntegerLiteral, "-1"),
            ]
        );
    }

    #[test]
    fn test_edge_minus_after_close_paren_is_sign() {
        assert_eq!(
            lex_all("(x)-1"),
            vec![
                tok(TokenKind::SpecialSymbol, "("),
                tok(TokenKind::Identifier, "x"),
                tok(TokenKind::SpecialSymbol, ")"),
                tok(TokenKind::IntegerLiteral, "-1"),
            ]
        );
    }

    #[test]
    fn test_edge_minus_after_malformed_real() {
        let mut handler = Handler::new();
        let tokens = tokenize("2e-x", &mut handler);
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::RealLiteral, "2e-"),
                tok(TokenKind::Identifier, "x"),
            ]
        );
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_minus_then_dot() {
        assert_eq!(
            lex_all("-.5"),
            vec![
                tok(TokenKind::ArithmeticOperator, "-"),
                tok(TokenKind::SpecialSymbol, "."),
                tok(TokenKind::IntegerLiteral, "5"),
            ]
        );
    }

    #[test]
    fn test_edge_slash_at_end() {
        assert_eq!(lex_all("/"), vec![tok(TokenKind::ArithmeticOperator, "/")]);
    }

    #[test]
    fn test_edge_open_comment_only() {
        assert!(lex_all("/*").is_empty());
    }

    #[test]
    fn test_edge_nul_character_is_unrecognized() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("a\0b", &mut handler);
        let tokens: Vec<_> = lexer.by_ref().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(lexer.unrecognized(), &['\0']);
    }

    #[test]
    fn test_edge_nul_inside_char_literal() {
        assert_eq!(lex_all("'\0'"), vec![tok(TokenKind::CharLiteral, "\0")]);
    }

    #[test]
    fn test_edge_unicode_whitespace_separates() {
        assert_eq!(
            lex_all("a\u{2003}b"),
            vec![tok(TokenKind::Identifier, "a"), tok(TokenKind::Identifier, "b")]
        );
    }

    #[test]
    fn test_edge_no_break_space_is_unrecognized() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("a\u{00A0}b", &mut handler);
        assert_eq!(lexer.next_token(), Some(tok(TokenKind::Identifier, "a")));
        assert_eq!(lexer.next_token(), Some(tok(TokenKind::Identifier, "b")));
        assert_eq!(lexer.unrecognized(), &['\u{00A0}']);
    }

    #[test]
    fn test_edge_non_ascii_digit_cannot_start_number() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("٣", &mut handler);
        assert_eq!(lexer.next_token(), None);
        assert_eq!(lexer.unrecognized(), &['٣']);
    }

    #[test]
    fn test_edge_all_diagnostics_in_order() {
        let mut handler = Handler::new();
        tokenize("@ 'a \"b", &mut handler);
        let codes: Vec<_> = handler
            .diagnostics()
            .into_iter()
            .filter_map(|d| d.code)
            .collect();
        assert_eq!(
            codes,
            vec![
                DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR,
                DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            ]
        );
    }
}
