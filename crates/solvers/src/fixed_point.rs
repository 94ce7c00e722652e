//! Fixed-point iteration with optional Aitken Δ² acceleration.
//!
//! # Algorithm
//!
//! Standard mode repeats `x_{n+1} = g(x_n)` and records the absolute step
//! `|x_{n+1} − x_n|`.
//!
//! Aitken mode takes two plain steps `x1 = g(x)`, `x2 = g(x1)` per outer
//! iteration and extrapolates
//!
//! ```text
//! x' = x − (x1 − x)² / ((x2 − x1) − (x1 − x))
//! ```
//!
//! recording `|x' − x|`. A denominator below `1e-12` in magnitude ends the run
//! with [`Status::Degenerate`]; this typically happens once the iterates have
//! already settled.
//!
//! # Stopping
//!
//! 1. step error below `tol` → [`Status::Converged`]
//! 2. iterate not finite → [`Status::Diverged`]
//! 3. iterations exhausted → [`Status::MaxIters`]
//!
//! Slow divergence is not detected: a run that never settles simply
//! exhausts its iterations. Observers can add stricter policies.
//!
//! # Points
//!
//! Besides the trace, a [`Solution`] keeps every point at which `g` was
//! evaluated, starting with `x0`, for drawing convergence paths. In Aitken
//! mode both intermediate points of each outer step are kept.

mod action;
mod aitken;
mod config;
mod error;
mod event;
mod record;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, Mode};
pub use error::Error;
pub use event::Event;
pub use record::Record;
pub use solution::Solution;

use rootfind_core::{Function, Observer};
use tracing::{debug, warn};

use crate::{Status, Trace};

/// Iterates `g` from `x0` and returns the trace and visited points.
///
/// The observer sees every record as it is produced and may stop the run
/// with [`Action::StopEarly`].
///
/// # Errors
///
/// Returns [`Error::Function`] if `g` fails to evaluate.
pub fn solve<G, Obs>(g: &G, x0: f64, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    G: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let solution = match config.mode() {
        Mode::Standard => standard(g, x0, config, &mut observer)?,
        Mode::Aitken => aitken::accelerated(g, x0, config, &mut observer)?,
    };

    debug!(
        mode = ?config.mode(),
        iters = solution.trace.len(),
        status = ?solution.trace.status(),
        "fixed-point iteration finished"
    );
    Ok(solution)
}

/// Iterates `g` from `x0` without observation.
///
/// # Errors
///
/// Returns [`Error::Function`] if `g` fails to evaluate.
pub fn solve_unobserved<G: Function>(g: &G, x0: f64, config: &Config) -> Result<Solution, Error> {
    solve(g, x0, config, ())
}

fn standard<G, Obs>(g: &G, x0: f64, config: &Config, observer: &mut Obs) -> Result<Solution, Error>
where
    G: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut points = vec![x0];
    let mut records = Vec::new();
    let mut x = x0;

    let status = 'run: {
        for iter in 1..=config.max_iters() {
            let next = eval(g, x)?;
            points.push(next);

            let record = Record {
                iter,
                x: next,
                error: (next - x).abs(),
            };
            let action = observer.observe(&Event {
                record: &record,
                points: &points[points.len() - 1..],
            });
            records.push(record);

            if let Some(status) = stop_status(&record, action, config) {
                break 'run status;
            }
            x = next;
        }
        Status::MaxIters
    };

    Ok(Solution::new(Trace::new(records, status), points))
}

/// Applies the per-record stopping rules shared by both modes.
fn stop_status(record: &Record, action: Option<Action>, config: &Config) -> Option<Status> {
    if let Some(Action::StopEarly) = action {
        return Some(Status::StoppedByObserver);
    }
    if record.error < config.tol() {
        return Some(Status::Converged);
    }
    if !record.x.is_finite() {
        warn!(iter = record.iter, x = record.x, "iterate is not finite, stopping");
        return Some(Status::Diverged);
    }
    None
}

fn eval<G: Function>(g: &G, x: f64) -> Result<f64, Error> {
    g.call(x).map_err(|source| Error::Function {
        x,
        source: Box::new(source),
    })
}
