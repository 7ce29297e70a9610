//! Identifier and reserved-word lexing.

use crate::keywords::classify_word;
use crate::token::Token;
use crate::Lexer;

/// Returns true if `c` can start a word.
#[inline]
pub fn is_word_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Returns true if `c` can continue a word.
///
/// Any letter or digit continues a word, non-ASCII digits included.
/// Underscores are not part of words.
#[inline]
pub fn is_word_continue(c: char) -> bool {
    c.is_alphanumeric()
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or reserved word.
    ///
    /// The lexeme keeps its original casing; only the classification is
    /// case-insensitive.
    pub(super) fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance_while(is_word_continue);

        let lexeme = self.cursor.slice_from(start);
        Token::new(classify_word(lexeme), lexeme)
    }
}
