//! Token definitions.
//!
//! A [`Token`] pairs a flat [`TokenKind`] classification with the exact text
//! it was built from. Reserved words are not split into one kind per keyword;
//! the lexeme carries the spelling.

use std::fmt;

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// A word from the reserved-word table, e.g. `begin`
    ReservedWord,
    /// Any other word starting with a letter
    Identifier,
    /// Digits with an optional leading sign, e.g. `-42`
    IntegerLiteral,
    /// A number with a fraction or exponent, e.g. `1.5e-3`
    RealLiteral,
    /// A single character between single quotes
    CharLiteral,
    /// Text between double quotes
    StringLiteral,
    /// `+`, `-`, `*` or `/`
    ArithmeticOperator,
    /// `=`, `<`, `>`, `<=`, `>=` or `<>`
    RelationalOperator,
    /// `:=`
    Assignment,
    /// `(`, `)`, `;`, `,`, `:` or a plain `.`
    SpecialSymbol,
    /// The `.` that follows the final `end` of a program
    EndMarker,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 11] = [
        TokenKind::ReservedWord,
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::RealLiteral,
        TokenKind::CharLiteral,
        TokenKind::StringLiteral,
        TokenKind::ArithmeticOperator,
        TokenKind::RelationalOperator,
        TokenKind::Assignment,
        TokenKind::SpecialSymbol,
        TokenKind::EndMarker,
    ];

    /// Returns the stable name used in token reports.
    ///
    /// # Example
    ///
    /// ```
    /// use pasc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::ReservedWord.report_name(), "RESERVED_WORD");
    /// assert_eq!(TokenKind::EndMarker.report_name(), "END_MARKER");
    /// ```
    pub const fn report_name(self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "RESERVED_WORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::RealLiteral => "REAL_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::ArithmeticOperator => "ARITHMETIC_OPERATOR",
            TokenKind::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::SpecialSymbol => "SPECIAL_SYMBOL",
            TokenKind::EndMarker => "END_MARKER",
        }
    }

    /// Returns true for integer and real literals.
    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(self, TokenKind::IntegerLiteral | TokenKind::RealLiteral)
    }

    /// Returns true for operator kinds, assignment included.
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::ArithmeticOperator | TokenKind::RelationalOperator | TokenKind::Assignment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report_name())
    }
}

/// A classified piece of source text.
///
/// Literal tokens hold their content: a char literal's lexeme is the single
/// character, a string literal's lexeme is the text between the quotes.
///
/// # Example
///
/// ```
/// use pasc_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Assignment, ":=");
/// assert_eq!(token.to_string(), "<:=, ASSIGNMENT>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What the token is
    pub kind: TokenKind,
    /// The text it was built from
    pub lexeme: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Returns the token's kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the token's text.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Returns true if this is the reserved word `end`, spelled in lowercase.
    pub fn is_end_keyword(&self) -> bool {
        self.kind == TokenKind::ReservedWord && self.lexeme == "end"
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.lexeme, self.kind)
    }
}
