//! Repl command implementation.
//!
//! Reads one line at a time, tokenizes it, and prints every token of the
//! line (end-of-input excluded). Stops at end of input.

use std::io::{BufRead, Write};

use monkey_lex::{Lexer, Token};

use crate::commands::tokens::write_text;
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the repl command.
#[derive(Debug, Clone, Default)]
pub struct ReplArgs {
    /// Prompt override.
    pub prompt: Option<String>,
    /// Print line and column before each token.
    pub spans: bool,
}

/// Repl command handler.
pub struct ReplCommand {
    args: ReplArgs,
    config: Config,
}

impl ReplCommand {
    /// Runs the loop over arbitrary input and output streams.
    ///
    /// Returns the number of lines read.
    pub fn start<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<usize> {
        let prompt = self.prompt();
        let spans = self.args.spans || self.config.output.show_spans;
        let mut line = String::new();
        let mut lines = 0;

        loop {
            write!(out, "{}", prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                tracing::debug!(lines, "end of input");
                return Ok(lines);
            }
            lines += 1;

            let tokens: Vec<Token> = Lexer::new(&line).collect();
            write_text(&tokens, spans, out)?;
        }
    }

    fn prompt(&self) -> &str {
        self.args
            .prompt
            .as_deref()
            .unwrap_or(&self.config.repl.prompt)
    }
}

impl Command for ReplCommand {
    type Args = ReplArgs;
    /// Number of lines read.
    type Output = usize;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<Self::Output> {
        let stdin = std::io::stdin();
        self.start(stdin.lock(), out)
    }

    fn name() -> &'static str {
        "repl"
    }
}

/// Run the repl on standard input and output.
pub fn run_repl(args: ReplArgs, config: Config) -> Result<()> {
    tracing::debug!(command = ReplCommand::name(), "running");
    let command = ReplCommand::new(args, config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    command.execute(&mut out)?;
    Ok(())
}
