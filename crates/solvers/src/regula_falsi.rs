//! Regula falsi (false position) on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Each step draws the secant through `(a, f(a))` and `(b, f(b))` and takes
//! its x-intercept as the new estimate:
//!
//! ```text
//! xr = b − f(b)·(a − b) / (f(a) − f(b))
//! ```
//!
//! The bracket keeps the endpoint whose value has the opposite sign of
//! `f(xr)`: if `f(a)·f(xr) < 0` the next bracket is `[a, xr]`, otherwise
//! `[xr, b]`.
//!
//! # Stopping
//!
//! Checked in this order after every recorded step:
//!
//! 1. `|f(xr)|` below machine epsilon → [`Status::ZeroResidual`]
//! 2. tolerance enabled and step error below it → [`Status::Converged`]
//! 3. `f(xr)` not finite → [`Status::Degenerate`]
//! 4. iterations exhausted → [`Status::MaxIters`]
//!
//! Before interpolating, a step whose denominator `|f(a) − f(b)|` falls below
//! machine epsilon ends the run with [`Status::Degenerate`] and the records
//! gathered so far. Neither case is an error.
//!
//! # Precondition
//!
//! [`solve`] assumes `f(a)·f(b) <= 0` and does not check it; a bracket that
//! violates it yields a meaningless but finite trace. Use [`check_bracket`]
//! to reject such brackets up front.

mod action;
mod config;
mod error;
mod event;
mod record;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use record::Record;

use rootfind_core::{Function, Observer};
use tracing::{debug, warn};

use crate::{Interval, Status, Trace, interval::straddles_zero};

/// Runs regula falsi on `bracket` and returns the iteration trace.
///
/// The observer sees every record as it is produced and may stop the run
/// with [`Action::StopEarly`].
///
/// # Errors
///
/// Returns [`Error::Function`] if `f` fails to evaluate at a point the
/// method needs. Numeric trouble never produces an error.
pub fn solve<F, Obs>(
    f: &F,
    bracket: impl Into<Interval>,
    config: &Config,
    mut observer: Obs,
) -> Result<Trace<Record>, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let [mut a, mut b] = bracket.into().as_array();
    let mut xr_old = a;
    let mut records = Vec::new();

    let status = 'run: {
        for iter in 1..=config.max_iters() {
            let fa = eval(f, a)?;
            let fb = eval(f, b)?;

            let denominator = fa - fb;
            if denominator.is_nan() || denominator.abs() < f64::EPSILON {
                warn!(iter, a, b, fa, fb, "f(a) and f(b) nearly equal, stopping");
                break 'run Status::Degenerate;
            }

            let xr = b - fb * (a - b) / denominator;
            let fxr = eval(f, xr)?;
            let record = Record {
                iter,
                a,
                b,
                xr,
                fxr,
                error: step_error(xr, xr_old),
            };

            let action = observer.observe(&Event {
                record: &record,
                fa,
                fb,
            });
            let error = record.error;
            records.push(record);

            if let Some(Action::StopEarly) = action {
                break 'run Status::StoppedByObserver;
            }
            if fxr.abs() < f64::EPSILON {
                break 'run Status::ZeroResidual;
            }
            if config.use_tol() && error < config.tol() {
                break 'run Status::Converged;
            }
            if !fxr.is_finite() {
                warn!(iter, xr, fxr, "non-finite function value, stopping");
                break 'run Status::Degenerate;
            }

            if fa * fxr < 0.0 {
                b = xr;
            } else {
                a = xr;
            }
            xr_old = xr;
        }
        Status::MaxIters
    };

    debug!(iters = records.len(), ?status, "regula falsi finished");
    Ok(Trace::new(records, status))
}

/// Runs regula falsi without observation.
///
/// # Errors
///
/// Returns [`Error::Function`] if `f` fails to evaluate.
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: impl Into<Interval>,
    config: &Config,
) -> Result<Trace<Record>, Error> {
    solve(f, bracket, config, ())
}

/// Checks that `f(a)·f(b) <= 0` on `bracket`.
///
/// # Errors
///
/// Returns [`Error::PreconditionViolation`] if both endpoint values have the
/// same sign, or [`Error::Function`] if an endpoint cannot be evaluated.
pub fn check_bracket<F: Function>(f: &F, bracket: impl Into<Interval>) -> Result<(), Error> {
    let [a, b] = bracket.into().as_array();
    let fa = eval(f, a)?;
    let fb = eval(f, b)?;

    if straddles_zero(fa, fb) {
        Ok(())
    } else {
        Err(Error::PreconditionViolation { a, b, fa, fb })
    }
}

/// Relative change from the previous estimate, or absolute change at zero.
fn step_error(xr: f64, xr_old: f64) -> f64 {
    #[allow(clippy::float_cmp)]
    let at_zero = xr == 0.0;
    if at_zero {
        (xr - xr_old).abs()
    } else {
        ((xr - xr_old) / xr).abs()
    }
}

fn eval<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    f.call(x).map_err(|source| Error::Function {
        x,
        source: Box::new(source),
    })
}
