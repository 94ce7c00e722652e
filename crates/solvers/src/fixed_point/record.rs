/// One fixed-point step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration counter, starting at 1. Counts outer steps in Aitken mode.
    pub iter: usize,

    /// New estimate: `g(x)` in standard mode, the extrapolated point in
    /// Aitken mode.
    pub x: f64,

    /// Absolute change from the previous estimate.
    pub error: f64,
}
