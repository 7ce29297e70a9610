//! Keywords command implementation.

use std::io::Write;

use pasc_lex::RESERVED_WORDS;

use crate::commands::traits::{self, Command};
use crate::error::Result;

/// Keywords command handler.
pub struct KeywordsCommand;

impl KeywordsCommand {
    /// The listing, one reserved word per line.
    pub fn listing() -> String {
        let mut out = RESERVED_WORDS.join("\n");
        out.push('\n');
        out
    }
}

impl Command for KeywordsCommand {
    type Args = ();
    type Output = usize;

    fn new(_args: Self::Args) -> Self {
        Self
    }

    fn execute(&self) -> Result<Self::Output> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(Self::listing().as_bytes())?;
        stdout.flush()?;
        Ok(RESERVED_WORDS.len())
    }

    fn name() -> &'static str {
        "keywords"
    }
}

/// Run the keywords command.
pub fn run_keywords() -> Result<usize> {
    traits::run::<KeywordsCommand>(())
}
