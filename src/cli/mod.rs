//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod compose;
mod eval;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, OutputFormat, TxmConfig};
use crate::transforms::{Transformer, TransformError};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// txm - Collapse CSS/SVG transform functions into a single matrix
#[derive(Parser)]
#[command(name = "txm")]
#[command(about = "Collapse CSS/SVG 2D transform functions into a single affine matrix")]
#[command(version)]
pub struct Cli {
    /// Path to a txm.toml (default: discovered from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format (overrides txm.toml)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Reject malformed transform strings instead of ignoring bad parts
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose transform strings, in order, and print the resulting matrix
    Compose {
        /// CSS/SVG transform strings, e.g. "translate(15px, 400px) rotate(85deg)"
        #[arg(required = true)]
        transforms: Vec<String>,
    },

    /// Map points through a transform
    Eval {
        /// CSS/SVG transform string
        transform: String,

        /// Point to map, as X,Y (repeatable)
        #[arg(short, long = "point", required = true, allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<(f64, f64)>,
    },

    /// Validate a transform string and list every problem
    Check {
        /// CSS/SVG transform string
        transform: String,
    },
}

/// Parse an `X,Y` point argument.
fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|_| format!("invalid x coordinate '{}'", x.trim()))?;
    let y = y.trim().parse::<f64>().map_err(|_| format!("invalid y coordinate '{}'", y.trim()))?;
    Ok((x, y))
}

/// Install the stderr log subscriber.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load txm.toml and apply flag overrides.
fn resolve_config(cli: &Cli) -> Result<TxmConfig, crate::config::ConfigError> {
    let mut config = load_config(cli.config.as_deref())?;
    let overrides = CliOverrides {
        format: cli.format,
        pretty: cli.pretty.then_some(true),
        strict: cli.strict.then_some(true),
    };
    merge_cli_overrides(&mut config, &overrides);
    Ok(config)
}

/// Compose one transform string onto `transformer`, honouring strict mode.
pub(crate) fn compose_one(
    transformer: &mut Transformer,
    css: &str,
    strict: bool,
) -> Result<(), TransformError> {
    if strict {
        transformer.try_transform(css)?;
    } else {
        transformer.transform(css);
    }
    Ok(())
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    match &cli.command {
        Commands::Compose { transforms } => compose::run_compose(transforms, &config),
        Commands::Eval { transform, points } => eval::run_eval(transform, points, &config),
        Commands::Check { transform } => check::run_check(transform),
    }
}
