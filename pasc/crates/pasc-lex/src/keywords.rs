//! Reserved-word table.
//!
//! Matching is case-insensitive and exact: `BEGIN` is reserved, `beginning`
//! is an identifier.

use crate::token::TokenKind;

/// The reserved words, lowercase and sorted.
pub const RESERVED_WORDS: [&str; 48] = [
    "absolute",
    "array",
    "begin",
    "case",
    "char",
    "const",
    "div",
    "do",
    "dowto",
    "else",
    "end",
    "external",
    "file",
    "for",
    "forward",
    "func",
    "function",
    "goto",
    "if",
    "implementation",
    "integer",
    "interface",
    "interrupt",
    "label",
    "main",
    "nil",
    "nit",
    "of",
    "packed",
    "proc",
    "program",
    "real",
    "record",
    "repeat",
    "set",
    "shl",
    "shr",
    "string",
    "then",
    "to",
    "type",
    "unit",
    "until",
    "uses",
    "var",
    "while",
    "with",
    "xor",
];

/// Longest entry in [`RESERVED_WORDS`], in bytes.
const MAX_RESERVED_LEN: usize = 14;

/// Returns true if `word`, lower-cased, is a reserved word.
///
/// # Example
///
/// ```
/// use pasc_lex::is_reserved_word;
///
/// assert!(is_reserved_word("Begin"));
/// assert!(!is_reserved_word("beginning"));
/// ```
pub fn is_reserved_word(word: &str) -> bool {
    // Longer words can never match, skip the allocation.
    if word.len() > MAX_RESERVED_LEN || word.is_empty() {
        return false;
    }

    matches!(
        word.to_lowercase().as_str(),
        "absolute"
            | "array"
            | "begin"
            | "case"
            | "char"
            | "const"
            | "div"
            | "do"
            | "dowto"
            | "else"
            | "end"
            | "external"
            | "file"
            | "for"
            | "forward"
            | "func"
            | "function"
            | "goto"
            | "if"
            | "implementation"
            | "integer"
            | "interface"
            | "interrupt"
            | "label"
            | "main"
            | "nil"
            | "nit"
            | "of"
            | "packed"
            | "proc"
            | "program"
            | "real"
            | "record"
            | "repeat"
            | "set"
            | "shl"
            | "shr"
            | "string"
            | "then"
            | "to"
            | "type"
            | "unit"
            | "until"
            | "uses"
            | "var"
            | "while"
            | "with"
            | "xor"
    )
}

/// Classifies a scanned word as [`TokenKind::ReservedWord`] or
/// [`TokenKind::Identifier`].
pub fn classify_word(word: &str) -> TokenKind {
    if is_reserved_word(word) {
        TokenKind::ReservedWord
    } else {
        TokenKind::Identifier
    }
}
