use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during fixed-point iteration.
#[derive(Debug, Error)]
pub enum Error {
    /// The iteration function could not be evaluated at `x`.
    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}
