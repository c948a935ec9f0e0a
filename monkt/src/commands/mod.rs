//! Command modules for the monkt CLI.
//!
//! Each subcommand lives in its own file and follows the same pattern:
//! an `...Args` struct filled in by `main`, a command type implementing
//! [`traits::Command`], and a `run_...` convenience function.

pub mod common;
pub mod traits;

pub mod check;
pub mod repl;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use repl::{run_repl, ReplArgs};
pub use tokens::{run_tokens, TokensArgs};
