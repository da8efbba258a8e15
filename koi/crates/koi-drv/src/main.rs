//! koi - print the token stream of a Koi source file.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use koi_drv::{emit_tokens, Config};

/// Koi - tokenize Koi source files
#[derive(Parser, Debug)]
#[command(name = "koi")]
#[command(author = "Koi Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the token stream of a Koi source file", long_about = None)]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "KOI_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "KOI_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "KOI_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, config_path) = Config::load(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    match &config_path {
        Some(path) => debug!(path = %path.display(), "loaded configuration"),
        None => debug!("no configuration file, using defaults"),
    }

    let source = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    debug!(file = %cli.file.display(), bytes = source.len(), "tokenizing");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit_tokens(&source, &config.lexer, &mut out)?;
    Ok(())
}

/// Initialize the logging system. Logs go to stderr so stdout carries only
/// tokens.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

