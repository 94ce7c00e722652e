//! Defaults file handling.
//!
//! ```toml
//! [scan]
//! delta = 0.25
//!
//! [regula_falsi]
//! tol = 1e-8
//! max_iters = 50
//! use_tol = true
//!
//! [fixed_point]
//! tol = 1e-10
//! max_iters = 200
//! aitken = true
//! patience = 5
//! ```
//!
//! Every table and key is optional.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rootfind_solvers::{fixed_point, regula_falsi};
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// File read when no `--config` is given.
pub const DEFAULT_PATH: &str = "rootfind.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub scan: ScanDefaults,
    pub regula_falsi: FalsiDefaults,
    pub fixed_point: FixedPointDefaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanDefaults {
    pub delta: f64,
}

impl Default for ScanDefaults {
    fn default() -> Self {
        Self { delta: 0.5 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FalsiDefaults {
    pub tol: f64,
    pub max_iters: usize,
    pub use_tol: bool,
}

impl Default for FalsiDefaults {
    fn default() -> Self {
        let config = regula_falsi::Config::default();
        Self {
            tol: config.tol(),
            max_iters: config.max_iters(),
            use_tol: config.use_tol(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixedPointDefaults {
    pub tol: f64,
    pub max_iters: usize,
    pub aitken: bool,

    /// Attach a divergence guard with this patience to every run.
    pub patience: Option<usize>,
}

impl Default for FixedPointDefaults {
    fn default() -> Self {
        let config = fixed_point::Config::default();
        Self {
            tol: config.tol(),
            max_iters: config.max_iters(),
            aitken: config.mode() == fixed_point::Mode::Aitken,
            patience: None,
        }
    }
}

impl Defaults {
    /// Loads defaults from `path`, or from [`DEFAULT_PATH`] if it exists.
    ///
    /// A missing file is only an error when it was named explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_PATH), false),
        };

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no defaults file, using built-in defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CliError::ReadConfig {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let defaults = Self::parse(&text).map_err(|source| CliError::Config {
            path: PathBuf::from(path),
            source,
        })?;
        debug!(path = %path.display(), ?defaults, "loaded defaults");
        Ok(defaults)
    }

    /// Parses defaults from TOML text.
    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
