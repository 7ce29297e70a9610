//! Command trait for the pasct CLI.

use crate::error::Result;

/// Standard command trait that all pasct commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Builds the command from `args` and executes it.
pub fn run<C: Command>(args: C::Args) -> Result<C::Output> {
    tracing::debug!(command = C::name(), "running command");
    C::new(args).execute()
}
