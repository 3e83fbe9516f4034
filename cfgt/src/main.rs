//! cfgt - command-line tools for cfgs configuration files.
//!
//! This is the main entry point for the cfgt CLI application.
//! It uses clap for argument parsing and dispatches to the
//! command handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::CommandDescription;
use commands::{check, run_check, run_tokens, tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{CfgtError, Result};

/// cfgt - inspect and validate configuration files
///
/// cfgt runs the cfgs lexer over configuration files, either to dump
/// their tokens or to check that they scan without errors.
#[derive(Parser, Debug)]
#[command(name = "cfgt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for cfgs configuration files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CFGT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CFGT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CFGT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cfgt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = tokens::TokensCommand::description(),
        long_about = tokens::TokensCommand::help()
    )]
    Tokens(TokensCommand),

    #[command(
        about = check::CheckCommand::description(),
        long_about = check::CheckCommand::help()
    )]
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files to lex
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Leave comments out of the output
    #[arg(long)]
    no_comments: bool,

    /// Stop each file after this many tokens
    #[arg(long, value_parser = clap::value_parser!(usize))]
    limit: Option<usize>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files to check
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Main entry point for the cfgt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.verbose, cli.no_color, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error so token dumps on standard output stay
/// machine-readable.
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
        .map_err(|e| CfgtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, no_color: bool, config: Config) -> Result<()> {
    let verbose = verbose || config.verbose;
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, no_color, config),
        Commands::Check(args) => execute_check(args, verbose, no_color, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, no_color: bool, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        verbose,
        input: args.input,
        format: args.format,
        no_comments: args.no_comments,
        limit: args.limit,
        no_color,
    };
    run_tokens(tokens_args, config)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, no_color: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        input: args.input,
        jobs: args.jobs,
        no_color,
    };
    run_check(check_args, config)
}
