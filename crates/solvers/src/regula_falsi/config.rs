use thiserror::Error;

/// Configuration for the regula falsi solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
    max_iters: usize,
    use_tol: bool,
}

/// Errors that can occur when validating a regula falsi config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iters: 100,
            use_tol: true,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// When `use_tol` is false the solver ignores `tol` and runs until the
    /// residual vanishes or `max_iters` is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn new(tol: f64, max_iters: usize, use_tol: bool) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self {
            tol,
            max_iters,
            use_tol,
        })
    }

    /// Returns the step error tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns true if the tolerance is used as a stopping criterion.
    #[must_use]
    pub fn use_tol(&self) -> bool {
        self.use_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(-1e-6, 10, true), Err(ConfigError::Tol));
        assert_eq!(Config::new(f64::NAN, 10, true), Err(ConfigError::Tol));
    }

    #[test]
    fn zero_tolerance_is_allowed() {
        let config = Config::new(0.0, 5, false).expect("valid config");
        assert_eq!(config.max_iters(), 5);
        assert!(!config.use_tol());
    }
}
