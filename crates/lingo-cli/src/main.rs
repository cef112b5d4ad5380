//! Lingo CLI entry point.
//!
//! Provides command-line tools for working with translation corpora:
//! - `lingo verify` - Check a corpus for completeness gaps and redundancy
//! - `lingo resolve` - Resolve a text code against a corpus

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_resolve, run_verify, ResolveArgs, VerifyArgs};
use tracing_subscriber::EnvFilter;

/// Translation corpus tools.
#[derive(Debug, Parser)]
#[command(name = "lingo")]
#[command(about = "Translation corpus tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a corpus JSON file for completeness and redundancy findings
    Verify(VerifyArgs),
    /// Resolve a text code against a corpus and print the rendering
    Resolve(ResolveArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Route resolution diagnostics from the core library to stderr.
fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Verify(args) => run_verify(args),
        Commands::Resolve(args) => run_resolve(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
