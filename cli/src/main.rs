//! sqlfmt - Main entry point
//!
//! Reads SQL type expressions from stdin (or a file) and writes their
//! canonical form to stdout.

use clap::Parser;
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use coltypes_cli::config::{Config, Overrides};
use coltypes_cli::error::CliError;
use tracing_subscriber::{EnvFilter, fmt};

/// sqlfmt - canonical formatter for SQL type expressions
#[derive(Parser, Debug)]
#[command(name = "sqlfmt")]
#[command(author, version, about = "Canonical formatter for SQL type expressions", long_about = None)]
struct Cli {
    /// Path to config file (default: sqlfmt.toml, if present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Target line width
    #[arg(long = "len", value_name = "N", allow_negative_numbers = true)]
    line_width: Option<i32>,

    /// Indent with spaces
    #[arg(long, conflicts_with = "use_tabs")]
    use_spaces: bool,

    /// Indent with tabs
    #[arg(long)]
    use_tabs: bool,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    tab_width: Option<i32>,

    /// Do not simplify expressions
    #[arg(long)]
    no_simplify: bool,

    /// Do not align clause keywords
    #[arg(long)]
    no_align: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Read from this file instead of stdin
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        let use_tabs = match (self.use_tabs, self.use_spaces) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Overrides {
            use_tabs,
            line_width: self.line_width,
            tab_width: self.tab_width,
            no_simplify: self.no_simplify,
            no_align: self.no_align,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let cfg = config.resolve(&cli.overrides())?;
    tracing::debug!(?cfg, "resolved configuration");

    let input = match &cli.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    print!("{}", coltypes_cli::format_input(&input, &cfg)?);
    Ok(())
}
