//! Root-finding solvers for real functions of one variable.
//!
//! Every solver takes a [`Function`] and plain numeric parameters and returns
//! the full iteration history as a [`Trace`]. Nothing is shared between runs.
//!
//! # Solvers
//!
//! - [`scan`]: finds sub-intervals of a range where the function changes sign
//! - [`regula_falsi`]: linear interpolation on a sign-changing bracket
//! - [`fixed_point`]: fixed-point iteration, optionally Aitken-accelerated
//!
//! [`method`] wraps the solvers behind a single configuration value.
//!
//! [`Function`]: rootfind_core::Function

mod interval;
mod trace;

pub mod fixed_point;
pub mod method;
pub mod regula_falsi;
pub mod scan;

pub use interval::Interval;
pub use trace::{Status, Trace};
