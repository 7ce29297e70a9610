//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop and the
//! diagnostics bookkeeping shared by the sub-scanners.

use pasc_util::{DiagnosticBuilder, Handler, Span};
use tracing::{trace, warn};

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult, Malformed};
use crate::lookback::Lookback;
use crate::token::Token;

use super::identifier::is_word_start;

/// Lexer for Pascal-like source text.
///
/// The lexer is pulled one token at a time. It never fails: malformed
/// literals yield a partial token and a diagnostic, unknown characters are
/// skipped and recorded.
///
/// # Example
///
/// ```
/// use pasc_lex::{Lexer, Token, TokenKind};
/// use pasc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("end.", &mut handler);
///
/// assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::ReservedWord, "end")));
/// assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::EndMarker, ".")));
/// assert_eq!(lexer.next_token(), None);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Error handler for reporting lexical problems.
    handler: &'a mut Handler,

    /// What the last emitted token means for `-` and `.`.
    pub(super) lookback: Lookback,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Skipped characters, in encounter order.
    unrecognized: Vec<char>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            lookback: Lookback::Start,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            unrecognized: Vec::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// A malformed literal is reported to the handler and its partial token
    /// is returned in its place.
    pub fn next_token(&mut self) -> Option<Token> {
        match self.scan_token()? {
            Ok(token) => Some(token),
            Err(malformed) => {
                self.report(&malformed.error, malformed.span);
                Some(malformed.into_partial())
            },
        }
    }

    /// Returns the next token, or `None` at end of input, leaving malformed
    /// literals to the caller.
    ///
    /// Unrecognized characters are still skipped and reported here; they
    /// never produce a token.
    ///
    /// # Example
    ///
    /// ```
    /// use pasc_lex::{LexError, Lexer, TokenKind};
    /// use pasc_util::Handler;
    ///
    /// let mut handler = Handler::new();
    /// let mut lexer = Lexer::new("\"abc", &mut handler);
    ///
    /// let malformed = lexer.scan_token().unwrap().unwrap_err();
    /// assert_eq!(malformed.error, LexError::UnterminatedString);
    /// assert_eq!(malformed.partial.kind, TokenKind::StringLiteral);
    /// assert_eq!(malformed.partial.lexeme, "abc");
    /// ```
    pub fn scan_token(&mut self) -> Option<LexResult<Token>> {
        loop {
            self.cursor.skip_whitespace();
            self.mark_token_start();

            if self.cursor.is_at_end() {
                return None;
            }

            let result = match self.cursor.current_char() {
                c if is_word_start(c) => Ok(self.lex_identifier()),
                c if c.is_ascii_digit() => self.lex_number(),
                '-' => self.lex_minus(),
                '/' if self.cursor.peek_char(1) == '*' => {
                    self.skip_block_comment();
                    continue;
                },
                '\'' => self.lex_char(),
                '"' => self.lex_string(),
                c => match self.lex_symbol(c) {
                    Some(token) => Ok(token),
                    None => {
                        self.skip_unrecognized(c);
                        continue;
                    },
                },
            };

            let token = match &result {
                Ok(token) => token,
                Err(malformed) => {
                    warn!(
                        line = self.token_start_line,
                        column = self.token_start_column,
                        "{}",
                        malformed.error
                    );
                    &malformed.partial
                },
            };
            self.lookback = Lookback::after(token);
            trace!(kind = %token.kind, lexeme = %token.lexeme, "token");

            return Some(result);
        }
    }

    /// Skips a character that starts no token and records it.
    fn skip_unrecognized(&mut self, c: char) {
        self.cursor.advance();
        self.unrecognized.push(c);
        warn!(
            line = self.token_start_line,
            column = self.token_start_column,
            "unrecognized character {:?}",
            c
        );
        self.report(&LexError::UnrecognizedChar(c), self.token_span());
    }

    /// Sends `error` to the handler as a diagnostic at `span`.
    fn report(&mut self, error: &LexError, span: Span) {
        let mut builder = DiagnosticBuilder::new(error.level(), error.to_string())
            .code(error.code())
            .span(span);
        if let Some(help) = error.help() {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a [`Malformed`] whose span runs from the token start to the
    /// cursor.
    pub(super) fn malformed(&self, partial: Token, error: LexError) -> Malformed {
        Malformed::new(partial, error, self.token_span())
    }

    /// Returns the span of the most recently scanned token (or skipped
    /// character), from its first byte up to the cursor.
    pub fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Characters skipped so far, in the order they were found.
    pub fn unrecognized(&self) -> &[char] {
        &self.unrecognized
    }

    /// Forgets the recorded unrecognized characters.
    ///
    /// Diagnostics already sent to the handler are kept.
    pub fn clear_unrecognized(&mut self) {
        self.unrecognized.clear();
    }

    /// Returns the lookback state left by the last emitted token.
    pub fn lookback(&self) -> Lookback {
        self.lookback
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once all input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
