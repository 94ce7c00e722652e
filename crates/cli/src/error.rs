//! Error types for the CLI.

use std::{io, path::PathBuf};

use rootfind_expr::ParseError;
use rootfind_solvers::{Interval, fixed_point, method, regula_falsi, scan};
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors reported by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read {}: {source}", path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("could not parse '{expr}': {source}")]
    Parse { expr: String, source: ParseError },

    #[error(transparent)]
    Scan(#[from] scan::InvalidArgument),

    #[error("invalid regula falsi settings: {0}")]
    FalsiConfig(#[from] regula_falsi::ConfigError),

    #[error("invalid fixed-point settings: {0}")]
    FixedPointConfig(#[from] fixed_point::ConfigError),

    #[error(transparent)]
    Method(#[from] method::Error),

    #[error(transparent)]
    FixedPoint(#[from] fixed_point::Error),

    #[error("no sign changes found in {range}; try a smaller step or a different range")]
    NoBrackets { range: Interval },

    #[error("none of the selected brackets encloses a root")]
    NoValidBrackets,

    #[error("bracket {index} does not exist; the scan found {available}")]
    Selection { index: usize, available: usize },

    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}
