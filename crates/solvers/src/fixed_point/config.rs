use thiserror::Error;

/// How successive iterates are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Plain iteration `x_{n+1} = g(x_n)`.
    #[default]
    Standard,

    /// Aitken Δ² extrapolation over two plain steps per iteration.
    Aitken,
}

/// Configuration for the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
    max_iters: usize,
    mode: Mode,
}

/// Errors that can occur when validating a fixed-point config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-8,
            max_iters: 100,
            mode: Mode::Standard,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn new(tol: f64, max_iters: usize, mode: Mode) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self {
            tol,
            max_iters,
            mode,
        })
    }

    /// Returns the step error tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of (outer) iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the iteration mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }
}
