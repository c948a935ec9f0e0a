//! Check command implementation.
//!
//! Tokenizes each input and reports every illegal character with its
//! location and a caret snippet. The command fails if any were found.

use std::io::Write;
use std::path::PathBuf;

use monkey_lex::{Lexer, TokenKind};
use monkey_util::SourceFile;

use crate::commands::common::{error_messages, read_source};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{MonktError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Input files; `-` reads standard input.
    pub inputs: Vec<PathBuf>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Reports the illegal characters of one source and returns how many
    /// there were.
    pub fn check_source<W: Write>(&self, source: &SourceFile, out: &mut W) -> Result<usize> {
        let mut lexer = Lexer::new(source.content());

        for token in lexer.by_ref().filter(|t| t.kind == TokenKind::Illegal) {
            writeln!(
                out,
                "{}:{}: illegal character '{}'",
                source.name(),
                token.span,
                token.literal.escape_debug()
            )?;
            if let Some(snippet) = source.snippet(token.span) {
                writeln!(out, "{}", snippet)?;
            }
        }

        let count = lexer.illegal_count();
        tracing::debug!(file = source.name(), illegal = count, "checked");
        Ok(count)
    }

    fn validate_inputs(&self) -> Result<()> {
        if self.args.inputs.is_empty() {
            return Err(MonktError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = ();

    fn new(args: Self::Args, _config: Config) -> Self {
        Self { args }
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<Self::Output> {
        self.validate_inputs()?;

        let mut count = 0;
        for path in &self.args.inputs {
            let source = read_source(path)?;
            count += self.check_source(&source, out)?;
        }

        if count > 0 {
            return Err(MonktError::IllegalTokens { count });
        }
        tracing::info!(files = self.args.inputs.len(), "no illegal characters");
        Ok(())
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command against standard output.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    tracing::debug!(command = CheckCommand::name(), "running");
    let command = CheckCommand::new(args, config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = command.execute(&mut out);
    out.flush()?;
    result
}
