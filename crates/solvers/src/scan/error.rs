use thiserror::Error;

/// Invalid arguments passed to [`search`](super::search).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    /// The step is zero, negative, or not a finite number.
    #[error("step must be positive and finite, got {delta}")]
    Step { delta: f64 },

    /// A range bound is NaN or infinite.
    #[error("range bound must be finite, got {value}")]
    Bound { value: f64 },
}
