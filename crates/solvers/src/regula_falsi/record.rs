/// One regula falsi step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration counter, starting at 1.
    pub iter: usize,

    /// Left bracket endpoint used for this step.
    pub a: f64,

    /// Right bracket endpoint used for this step.
    pub b: f64,

    /// Interpolated estimate.
    pub xr: f64,

    /// Function value at `xr`.
    pub fxr: f64,

    /// Change from the previous estimate.
    ///
    /// Relative (`|xr − xr_old| / |xr|`) unless `xr` is exactly zero, in
    /// which case it is absolute. The first step compares against `a`.
    pub error: f64,
}
