use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during regula falsi solving.
#[derive(Debug, Error)]
pub enum Error {
    /// The function could not be evaluated at `x`.
    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The bracket endpoints do not straddle a root.
    #[error("no sign change on [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    PreconditionViolation { a: f64, b: f64, fa: f64, fb: f64 },
}
