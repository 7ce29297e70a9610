//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch loop
//! - `identifier` - Identifier and reserved-word lexing
//! - `number` - Integer and real literal lexing
//! - `string` - Character and string literal lexing
//! - `operator` - Operator and punctuation lexing, including the `-` rule
//! - `comment` - Block comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
pub use identifier::{is_word_continue, is_word_start};
