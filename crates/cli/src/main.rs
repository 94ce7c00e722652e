//! `rootfind`: locate and refine roots of one-variable functions.
//!
//! # Commands
//!
//! - `rootfind brackets <f> -a <from> -b <to>` lists sign-change brackets
//! - `rootfind falsi <f> -a <from> -b <to>` refines each bracket with regula falsi
//! - `rootfind fixed-point <g> --x0 <start>` iterates `x = g(x)`
//!
//! Defaults for the step and the solver settings are read from
//! `rootfind.toml` when present; flags override them.

use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod render;

pub use error::{CliError, Result};

/// Root finding by bracket search, regula falsi and fixed-point iteration
#[derive(Parser)]
#[command(name = "rootfind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every iteration (default log level `debug`; `RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults file [default: rootfind.toml, if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the subintervals of a range where f changes sign
    Brackets(commands::RangeArgs),

    /// Refine the roots of f with regula falsi, one run per bracket
    Falsi(commands::falsi::Args),

    /// Iterate x = g(x), optionally with Aitken acceleration
    FixedPoint(commands::fixed_point::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let defaults = config::Defaults::load(cli.config.as_deref())?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Brackets(args) => commands::brackets::run(&args, &defaults, &mut out),
        Commands::Falsi(args) => commands::falsi::run(&args, &defaults, &mut out),
        Commands::FixedPoint(args) => commands::fixed_point::run(&args, &defaults, &mut out),
    }
}

/// Logs go to stderr so tables on stdout stay clean.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_negative_bounds() {
        let cli = Cli::try_parse_from(["rootfind", "falsi", "x^2 - 4", "-a", "-3", "-b", "3"])
            .expect("valid arguments");

        let Commands::Falsi(args) = cli.command else {
            panic!("expected falsi");
        };
        assert_eq!(args.range.f, "x^2 - 4");
        assert_eq!((args.range.a, args.range.b), (-3.0, 3.0));
        assert!(args.select.is_empty());
    }

    #[test]
    fn parses_selection_list() {
        let cli = Cli::try_parse_from([
            "rootfind", "falsi", "x^2 - 4", "-a", "-3", "-b", "3", "--select", "1,3",
        ])
        .expect("valid arguments");

        let Commands::Falsi(args) = cli.command else {
            panic!("expected falsi");
        };
        assert_eq!(args.select, vec![1, 3]);
    }

    #[test]
    fn parses_fixed_point_flags() {
        let cli = Cli::try_parse_from([
            "rootfind",
            "fixed-point",
            "cos(x)",
            "--x0",
            "1",
            "--aitken",
            "--f",
            "cos(x) - x",
            "-v",
        ])
        .expect("valid arguments");

        assert!(cli.verbose);
        let Commands::FixedPoint(args) = cli.command else {
            panic!("expected fixed-point");
        };
        assert!(args.aitken);
        assert_eq!(args.f.as_deref(), Some("cos(x) - x"));
    }
}
