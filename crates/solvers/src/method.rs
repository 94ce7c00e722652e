//! A single entry point for running either root-finding method.
//!
//! Library callers describe what to run with a [`Method`] value and pass it
//! to [`run`] together with the compiled function. For regula falsi the
//! function is `f` itself; for fixed-point iteration it is the iteration map
//! `g`.
//!
//! [`run`] is the unobserved entry point. Callers that attach observers use
//! [`sweep`] after [`scan::search`], or [`fixed_point::solve`] directly, as
//! the `rootfind` binary does.

use rootfind_core::{Function, Observer};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    Interval, Trace, fixed_point,
    regula_falsi::{self, Record},
    scan,
};

/// Which method to run, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// Scan `range` with step `delta`, then run regula falsi on every bracket.
    RegulaFalsi {
        range: Interval,
        delta: f64,
        config: regula_falsi::Config,
    },

    /// Iterate from `x0`.
    FixedPoint {
        x0: f64,
        config: fixed_point::Config,
    },
}

/// One regula falsi run on a scanned bracket.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketRun {
    pub bracket: Interval,
    pub trace: Trace<Record>,
}

/// The outcome of scanning a range and refining every bracket found.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sweep {
    /// Runs in scan order, one per bracket that passed the sign check.
    pub runs: Vec<BracketRun>,

    /// Brackets whose endpoints failed the sign check at full precision.
    pub skipped: Vec<Interval>,
}

impl Sweep {
    /// Returns true if the scan produced no brackets at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() && self.skipped.is_empty()
    }
}

/// The result of [`run`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    RegulaFalsi(Sweep),
    FixedPoint(fixed_point::Solution),
}

/// Errors that can occur when running a [`Method`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid scan argument: {0}")]
    Scan(#[from] scan::InvalidArgument),

    #[error(transparent)]
    RegulaFalsi(#[from] regula_falsi::Error),

    #[error(transparent)]
    FixedPoint(#[from] fixed_point::Error),
}

/// Runs `method` on `function`.
///
/// # Errors
///
/// Returns an error if the scan arguments are invalid or if the function
/// fails at a point the chosen method must evaluate.
pub fn run<F: Function>(method: &Method, function: &F) -> Result<Outcome, Error> {
    match *method {
        Method::RegulaFalsi {
            range,
            delta,
            config,
        } => {
            let brackets = scan::search(function, range, delta)?;
            sweep_unobserved(function, &brackets, &config).map(Outcome::RegulaFalsi)
        }
        Method::FixedPoint { x0, config } => {
            let solution = fixed_point::solve_unobserved(function, x0, &config)?;
            Ok(Outcome::FixedPoint(solution))
        }
    }
}

/// Runs regula falsi on each bracket, skipping those without a sign change.
///
/// Scanned brackets have rounded endpoints, so a bracket can lose its sign
/// change when re-evaluated; such brackets are reported in
/// [`Sweep::skipped`] instead of being iterated.
///
/// `observer_for` is called once per iterated bracket and returns the
/// observer for that run.
///
/// # Errors
///
/// Returns an error if `f` fails to evaluate inside a bracket.
pub fn sweep<F, Obs>(
    f: &F,
    brackets: &[Interval],
    config: &regula_falsi::Config,
    mut observer_for: impl FnMut(Interval) -> Obs,
) -> Result<Sweep, Error>
where
    F: Function,
    Obs: for<'a> Observer<regula_falsi::Event<'a>, regula_falsi::Action>,
{
    let mut result = Sweep::default();

    for &bracket in brackets {
        match regula_falsi::check_bracket(f, bracket) {
            Ok(()) => {}
            Err(regula_falsi::Error::PreconditionViolation { .. }) => {
                warn!(%bracket, "bracket does not enclose a root, skipping");
                result.skipped.push(bracket);
                continue;
            }
            Err(error) => return Err(error.into()),
        }

        let trace = regula_falsi::solve(f, bracket, config, observer_for(bracket))?;
        info!(%bracket, iters = trace.len(), status = ?trace.status(), "bracket refined");
        result.runs.push(BracketRun { bracket, trace });
    }

    Ok(result)
}

/// Runs [`sweep`] without observation.
///
/// # Errors
///
/// Returns an error if `f` fails to evaluate inside a bracket.
pub fn sweep_unobserved<F: Function>(
    f: &F,
    brackets: &[Interval],
    config: &regula_falsi::Config,
) -> Result<Sweep, Error> {
    sweep(f, brackets, config, |_| ())
}
