//! Tokens command implementation.
//!
//! Tokenizes each input and prints the resulting stream, end-of-input
//! token included, either as text lines or as JSON.

use std::io::Write;
use std::path::PathBuf;

use monkey_lex::{tokenize, Token};
use monkey_util::SourceFile;

use crate::commands::common::{error_messages, read_source, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{MonktError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Input files; `-` reads standard input.
    pub inputs: Vec<PathBuf>,
    /// Output format override (`text` or `json`).
    pub format: Option<String>,
    /// Print line and column before each token.
    pub spans: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Execute the command against already-loaded sources.
    pub fn write_sources<W: Write>(&self, sources: &[SourceFile], out: &mut W) -> Result<usize> {
        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.config.output.format)?;
        let spans = self.show_spans();
        let with_headers = sources.len() > 1;
        let mut total = 0;

        for (index, source) in sources.iter().enumerate() {
            let tokens = tokenize(source.content());
            tracing::debug!(file = source.name(), tokens = tokens.len(), "tokenized");
            total += tokens.len();

            match format {
                OutputFormat::Text => {
                    if with_headers {
                        if index > 0 {
                            writeln!(out)?;
                        }
                        writeln!(out, "==> {} <==", source.name())?;
                    }
                    write_text(&tokens, spans, out)?;
                }
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, &tokens)?;
                    writeln!(out)?;
                }
            }
        }

        Ok(total)
    }

    /// Spans are shown when either the flag or the configuration asks.
    fn show_spans(&self) -> bool {
        self.args.spans || self.config.output.show_spans
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

/// Writes one token per line.
pub fn write_text<W: Write>(tokens: &[Token], spans: bool, out: &mut W) -> Result<()> {
    for token in tokens {
        if spans {
            writeln!(out, "{}  {}", token.span, token)?;
        } else {
            writeln!(out, "{}", token)?;
        }
    }
    Ok(())
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    /// Total number of tokens printed.
    type Output = usize;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<Self::Output> {
        self.validate_inputs()?;
        let sources = self
            .args
            .inputs
            .iter()
            .map(|path| read_source(path))
            .collect::<Result<Vec<_>>>()?;
        self.write_sources(&sources, out)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command against standard output.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    tracing::debug!(command = TokensCommand::name(), "running");
    let command = TokensCommand::new(args, config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    command.execute(&mut out)?;
    out.flush()?;
    Ok(())
}
