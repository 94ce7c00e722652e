//! Bracket search: scanning a range for sign changes.
//!
//! # Algorithm
//!
//! The range `[a, b]` is sampled on a grid `a, a + delta, a + 2·delta, …`
//! whose last point is always exactly `b`. Each pair of neighbouring grid
//! points whose function values straddle zero (`f(x_i)·f(x_{i+1}) <= 0`) is
//! reported as an [`Interval`].
//!
//! # Evaluation failures
//!
//! A point where the function fails or returns a non-finite value is skipped
//! together with both pairs that touch it. The scan itself never aborts for
//! that reason.
//!
//! # Reporting
//!
//! Reported endpoints are the grid points rounded to eight decimal digits, so
//! that floating drift in `a + k·delta` does not leak into the output.
//! A root sitting exactly on a grid point yields two adjacent hits.

mod error;
mod grid;


pub use error::InvalidArgument;

use rootfind_core::Function;
use tracing::debug;

use crate::{Interval, interval::straddles_zero};

use grid::Grid;

/// Number of decimal digits kept in reported endpoints.
const REPORT_DIGITS: i32 = 8;

/// Scans `range` with step `delta` and returns every sub-interval where `f`
/// changes sign or touches zero, in left-to-right order.
///
/// An empty result means no sign change was detected on the grid.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `delta` is not a positive finite number or
/// if either bound is non-finite.
pub fn search<F>(
    f: &F,
    range: impl Into<Interval>,
    delta: f64,
) -> Result<Vec<Interval>, InvalidArgument>
where
    F: Function,
{
    let range = range.into();
    let grid = Grid::new(range, delta)?;

    let mut hits = Vec::new();
    let mut skipped = 0usize;
    let mut previous: Option<(f64, Option<f64>)> = None;

    for x in grid {
        let fx = sample(f, x);

        if let Some((x_prev, fx_prev)) = previous {
            match (fx_prev, fx) {
                (Some(f0), Some(f1)) => {
                    if straddles_zero(f0, f1) {
                        hits.push(Interval::new(round(x_prev), round(x)));
                    }
                }
                _ => skipped += 1,
            }
        }

        previous = Some((x, fx));
    }

    debug!(
        lo = range.lo(),
        hi = range.hi(),
        delta,
        hits = hits.len(),
        skipped,
        "bracket scan finished"
    );

    Ok(hits)
}

/// Evaluates `f` at a grid point, mapping failures and non-finite values to `None`.
fn sample<F: Function>(f: &F, x: f64) -> Option<f64> {
    match f.call(x) {
        Ok(fx) if fx.is_finite() => Some(fx),
        Ok(fx) => {
            debug!(x, fx, "non-finite value, skipping grid point");
            None
        }
        Err(error) => {
            debug!(x, %error, "evaluation failed, skipping grid point");
            None
        }
    }
}

/// Rounds `x` to [`REPORT_DIGITS`] decimal digits.
fn round(x: f64) -> f64 {
    let scale = 10f64.powi(REPORT_DIGITS);
    let rounded = (x * scale).round() / scale;
    if rounded.is_finite() { rounded } else { x }
}
