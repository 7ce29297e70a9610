//! Pasct CLI - token reports for Pascal-like sources.
//!
//! This is the main entry point for the pasct CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;
mod report;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_init, run_keywords, run_lex, InitArgs, LexArgs};
use config::{Config, ReportFormat};
use error::{PasctError, Result};

/// Pasct - a token reporter for Pascal-like sources
///
/// Pasct scans a source file and prints one `<lexeme, KIND>` line per
/// token, followed by the characters it could not recognize.
#[derive(Parser, Debug)]
#[command(name = "pasct")]
#[command(author = "Pasc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token reports for Pascal-like sources", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PASCT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PASCT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PASCT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the pasct CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a source and print its token report
    ///
    /// Lexical errors are reported as diagnostics on stderr and do not
    /// change the exit status.
    Lex(LexCommand),

    /// List the reserved words
    Keywords,

    /// Write a default pasct.toml
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file (`@file` is accepted, `-` reads stdin)
    input: String,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<ReportFormat>,

    /// Append an end-of-input line after the last token
    #[arg(long)]
    show_end_of_input: bool,

    /// Don't print the report to stdout
    #[arg(short, long)]
    quiet: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing pasct.toml
    #[arg(short, long)]
    force: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, !cli.no_color, config)?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout only carries the report. `RUST_LOG`
/// overrides the default filter.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("pasct=info,pasc_lex=error")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PasctError::Config(format!("Failed to initialize logging: {}", e)))?;

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
fn execute_command(command: Commands, color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, color, config),
        Commands::Keywords => run_keywords().map(|_| ()),
        Commands::Init(args) => execute_init(args),
    }
}

/// Builds the lex arguments, letting command-line flags win over the config.
fn lex_args(args: LexCommand, color: bool, config: Config) -> LexArgs {
    LexArgs {
        input: args.input,
        output: args.output.or(config.report.output),
        format: args.format.unwrap_or(config.report.format),
        show_end_of_input: args.show_end_of_input || config.report.show_end_of_input,
        color: color && std::io::stderr().is_terminal(),
        quiet: args.quiet,
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, color: bool, config: Config) -> Result<()> {
    run_lex(lex_args(args, color, config)).map(|_| ())
}

/// Execute the init command.
fn execute_init(args: InitCommand) -> Result<()> {
    let written = run_init(InitArgs {
        path: args.path,
        force: args.force,
    })?;
    println!("Wrote {}", written.display());
    Ok(())
}
