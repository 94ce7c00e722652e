//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasEstimate`]: events that carry the current estimate
//! - [`HasStepError`]: events that carry the step error
//! - [`HasResidual`]: events that carry a function value at the estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootfind_core::Observer;
//! use rootfind_observers::traits::{CanStopEarly, HasStepError};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasStepError, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.step_error() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootfind_solvers::{fixed_point, regula_falsi};

/// An event that carries the solver's current estimate.
pub trait HasEstimate {
    /// Returns the iteration counter, starting at 1.
    fn iter(&self) -> usize;

    /// Returns the estimate produced by this iteration.
    fn estimate(&self) -> f64;
}

/// An event that carries the change from the previous estimate.
pub trait HasStepError {
    /// Returns the step error recorded for this iteration.
    fn step_error(&self) -> f64;
}

/// An event that carries the function value at the estimate.
///
/// Only regula falsi evaluates `f` at its estimate; fixed-point iteration
/// evaluates `g`, so its events do not implement this.
pub trait HasResidual {
    /// Returns `f(estimate)` for this iteration.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- regula_falsi ---

impl HasEstimate for regula_falsi::Event<'_> {
    fn iter(&self) -> usize {
        self.record.iter
    }

    fn estimate(&self) -> f64 {
        self.record.xr
    }
}

impl HasStepError for regula_falsi::Event<'_> {
    fn step_error(&self) -> f64 {
        self.record.error
    }
}

impl HasResidual for regula_falsi::Event<'_> {
    fn residual(&self) -> f64 {
        self.record.fxr
    }
}

impl CanStopEarly for regula_falsi::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- fixed_point ---

impl HasEstimate for fixed_point::Event<'_> {
    fn iter(&self) -> usize {
        self.record.iter
    }

    fn estimate(&self) -> f64 {
        self.record.x
    }
}

impl HasStepError for fixed_point::Event<'_> {
    fn step_error(&self) -> f64 {
        self.record.error
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
