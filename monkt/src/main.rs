//! Monkt CLI - A command-line driver for the Monkey lexer.
//!
//! This is the main entry point for the monkt CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handler based on user input.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_repl, run_tokens, CheckArgs, ReplArgs, TokensArgs};
use config::Config;
use error::{MonktError, Result};

/// Monkt - Tokenize Monkey source code
///
/// Monkt prints the token stream of Monkey programs, reports characters
/// the language does not recognize, and offers an interactive tokenizer.
#[derive(Parser, Debug)]
#[command(name = "monkt")]
#[command(author = "Monkey Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Monkey source code", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MONKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MONKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MONKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the monkt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each input
    ///
    /// Tokenizes every file (or `-` for standard input) and prints one
    /// token per line, ending with the end-of-input token.
    Tokens(TokensCommand),

    /// Report illegal characters
    ///
    /// Exits with an error if any input contains a character that is not
    /// part of the Monkey language.
    Check(CheckCommand),

    /// Tokenize lines interactively
    ///
    /// Reads standard input line by line and prints the tokens of each.
    Repl(ReplCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files (`-` reads standard input)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Print line and column before each token
    #[arg(short, long)]
    spans: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files (`-` reads standard input)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug)]
struct ReplCommand {
    /// Prompt printed before each line (default: from config)
    #[arg(short, long)]
    prompt: Option<String>,

    /// Print line and column before each token
    #[arg(short, long)]
    spans: bool,
}

/// Main entry point for the monkt CLI.
fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MonktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
        Commands::Repl(args) => execute_repl(args, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        inputs: args.inputs,
        format: args.format,
        spans: args.spans,
    };
    run_tokens(tokens_args, config)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        inputs: args.inputs,
    };
    run_check(check_args, config)
}

/// Execute the repl command.
fn execute_repl(args: ReplCommand, config: Config) -> Result<()> {
    let repl_args = ReplArgs {
        prompt: args.prompt,
        spans: args.spans,
    };
    run_repl(repl_args, config)
}
