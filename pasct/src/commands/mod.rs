//! Command modules for the pasct CLI.
//!
//! Each subcommand is implemented in its own file behind the
//! [`traits::Command`] trait.

pub mod traits;

pub mod init;
pub mod keywords;
pub mod lex;

// Re-export command types and functions
pub use init::{run_init, InitArgs};
pub use keywords::run_keywords;
pub use lex::{run_lex, LexArgs};
