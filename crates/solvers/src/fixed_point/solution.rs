use rootfind_core::Function;

use crate::Trace;

use super::Record;

/// The result of a fixed-point run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Iteration records and the terminal status.
    pub trace: Trace<Record>,

    /// Every point at which `g` was evaluated, starting with `x0`.
    pub points: Vec<f64>,
}

impl Solution {
    pub(super) fn new(trace: Trace<Record>, points: Vec<f64>) -> Self {
        Self { trace, points }
    }

    /// Returns the final estimate, or `None` if no step was recorded.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.trace.last().map(|record| record.x)
    }

    /// Evaluates `f` at the final estimate.
    ///
    /// Fixed-point iteration solves `g(x) = x`; when `g` was derived from an
    /// equation `f(x) = 0`, this checks that the estimate also satisfies it.
    /// Returns `None` if no step was recorded.
    ///
    /// # Errors
    ///
    /// Returns the function's error if `f` is undefined at the estimate.
    pub fn residual<F: Function>(&self, f: &F) -> Option<Result<f64, F::Error>> {
        self.root().map(|x| f.call(x))
    }
}
