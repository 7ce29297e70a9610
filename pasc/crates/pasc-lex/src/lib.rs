//! pasc-lex - Lexical scanner for a Pascal-like teaching language
//!
//! This crate turns source text into a flat stream of classified tokens. It
//! resolves the language's few context-dependent characters with one token
//! of lookback and at most two characters of lookahead, and it never stops
//! on bad input: malformed literals become partial tokens plus diagnostics,
//! unknown characters are skipped and recorded.
//!
//! # Example Usage
//!
//! ```
//! use pasc_lex::{Lexer, Token, TokenKind};
//! use pasc_util::Handler;
//!
//! let source = "program p; begin x := -1 end.";
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new(source, &mut handler);
//!
//! assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::ReservedWord, "program")));
//!
//! // Lexer implements Iterator
//! let rest: Vec<Token> = lexer.collect();
//! assert_eq!(rest.last(), Some(&Token::new(TokenKind::EndMarker, ".")));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`keywords`] - The reserved-word table
//! - [`lookback`] - The previous-token state machine
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Recoverable lexical errors
//!
//! # Disambiguation
//!
//! - `-` after an integer, real or identifier is subtraction; elsewhere a
//!   following digit makes it the sign of a number.
//! - `.` right after the lowercase reserved word `end` is the end marker;
//!   elsewhere it is a special symbol.
//! - `/*` opens a comment; any other `/` is division.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod lookback;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{is_blank, Cursor};
pub use error::{LexError, LexResult, Malformed};
pub use keywords::{classify_word, is_reserved_word, RESERVED_WORDS};
pub use lexer::{is_word_continue, is_word_start, Lexer};
pub use lookback::Lookback;
pub use token::{Token, TokenKind};

use pasc_util::Handler;

/// Scans all of `source`, reporting problems to `handler`.
///
/// # Example
///
/// ```
/// use pasc_lex::{tokenize, TokenKind};
/// use pasc_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = tokenize("x - 1", &mut handler);
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::ArithmeticOperator);
/// ```
pub fn tokenize(source: &str, handler: &mut Handler) -> Vec<Token> {
    Lexer::new(source, handler).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to collect all tokens from source.
    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        tokenize(source, &mut handler)
    }

    fn tok(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme)
    }

    #[test]
    fn test_small_program() {
        let source = "program teste;\nvar x: integer;\nbegin\n  x := 10;\nend.";
        let tokens = lex_all(source);
        let expected = vec![
            tok(TokenKind::ReservedWord, "program"),
            tok(TokenKind::Identifier, "teste"),
            tok(TokenKind::SpecialSymbol, ";"),
            tok(TokenKind::ReservedWord, "var"),
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::SpecialSymbol, ":"),
            tok(TokenKind::ReservedWord, "integer"),
            tok(TokenKind::SpecialSymbol, ";"),
            tok(TokenKind::ReservedWord, "begin"),
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::Assignment, ":="),
            tok(TokenKind::IntegerLiteral, "10"),
            tok(TokenKind::SpecialSymbol, ";"),
            tok(TokenKind::ReservedWord, "end"),
            tok(TokenKind::EndMarker, "."),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_display_of_stream() {
        let rendered: Vec<String> = lex_all("x := 'a'")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            vec!["<x, IDENTIFIER>", "<:=, ASSIGNMENT>", "<a, CHAR_LITERAL>"]
        );
    }

    #[test]
    fn test_unrecognized_characters_in_order() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("a @ b # c @", &mut handler);
        let tokens: Vec<_> = lexer.by_ref().collect();
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Identifier, "a"),
                tok(TokenKind::Identifier, "b"),
                tok(TokenKind::Identifier, "c"),
            ]
        );
        assert_eq!(lexer.unrecognized(), &['@', '#', '@']);
    }

    #[test]
    fn test_unrecognized_visible_mid_scan() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("a $ b ?", &mut handler);
        lexer.next_token();
        assert!(lexer.unrecognized().is_empty());
        lexer.next_token();
        assert_eq!(lexer.unrecognized(), &['$']);
    }

    #[test]
    fn test_reserved_word_invariant() {
        let source = "Program BEGIN eNd xor Shl implementation interrupt";
        for token in lex_all(source) {
            assert_eq!(token.kind, TokenKind::ReservedWord);
            assert!(RESERVED_WORDS.contains(&token.lexeme.to_lowercase().as_str()));
        }
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_word_classification_is_stable() {
        use proptest::prelude::*;

        proptest!(|(input in "[A-Za-z][A-Za-z0-9]{0,20}")| {
            let first = lex_all(&input);
            let second = lex_all(&input);
            prop_assert_eq!(first.len(), 1);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&first[0].lexeme, &input);
            prop_assert_eq!(first[0].kind, classify_word(&input));
        });
    }

    #[test]
    fn test_property_reserved_words_any_case() {
        use proptest::prelude::*;

        proptest!(|(index in 0..RESERVED_WORDS.len(), mask in any::<u16>())| {
            let word: String = RESERVED_WORDS[index]
                .chars()
                .enumerate()
                .map(|(i, c)| if mask >> (i % 16) & 1 == 1 { c.to_ascii_uppercase() } else { c })
                .collect();
            let tokens = lex_all(&word);
            prop_assert_eq!(tokens, vec![tok(TokenKind::ReservedWord, &word)]);
        });
    }

    #[test]
    fn test_property_integers() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,30}")| {
            prop_assert_eq!(lex_all(&input), vec![tok(TokenKind::IntegerLiteral, &input)]);
        });
    }

    #[test]
    fn test_property_reals() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,8}(\\.[0-9]{1,8})?[eE][+-]?[0-9]{1,3}")| {
            prop_assert_eq!(lex_all(&input), vec![tok(TokenKind::RealLiteral, &input)]);
        });
    }

    #[test]
    fn test_property_string_literals() {
        use proptest::prelude::*;

        proptest!(|(content in "[^\"]{0,50}")| {
            let source = format!("\"{}\"", content);
            prop_assert_eq!(lex_all(&source), vec![tok(TokenKind::StringLiteral, &content)]);
        });
    }

    #[test]
    fn test_property_never_panics_and_always_ends() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,200}")| {
            let mut handler = Handler::new();
            let mut lexer = Lexer::new(&input, &mut handler);
            let mut count = 0usize;
            let mut last_position = 0usize;
            while lexer.next_token().is_some() {
                count += 1;
                prop_assert!(lexer.position() > last_position);
                last_position = lexer.position();
                prop_assert!(count <= input.len());
            }
            prop_assert!(lexer.is_at_end());
        });
    }

    #[test]
    fn test_property_unrecognized_chars_are_skipped() {
        use proptest::prelude::*;

        proptest!(|(junk in "[@#$%&?!~^_|\\[\\]{}]{1,10}")| {
            let source = format!("a{}b", junk);
            let mut handler = Handler::new();
            let mut lexer = Lexer::new(&source, &mut handler);
            let tokens: Vec<_> = lexer.by_ref().collect();
            prop_assert_eq!(
                tokens,
                vec![tok(TokenKind::Identifier, "a"), tok(TokenKind::Identifier, "b")]
            );
            let expected: Vec<char> = junk.chars().collect();
            prop_assert_eq!(lexer.unrecognized(), expected.as_slice());
        });
    }
}
