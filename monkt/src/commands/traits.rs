//! Command trait for the monkt CLI.
//!
//! This module defines the standard command trait that all commands
//! implement to keep their structure consistent across the application.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all monkt commands must implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments and the
    /// loaded configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command, writing its report to `out`.
    fn execute<W: Write>(&self, out: &mut W) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
