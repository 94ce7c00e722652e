//! Reusable observers for the rootfind solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both iterative solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasEstimate`], [`HasStepError`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Logger`] emits one `tracing` event per iteration.
//! - [`DivergenceGuard`] stops a run whose step error keeps growing.
//!
//! Combine them with a tuple, e.g. `(Logger::new("falsi"), DivergenceGuard::new(5))`.
//!
//! [`Observer`]: rootfind_core::Observer
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasStepError`]: traits::HasStepError
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

mod guard;
mod logger;
pub mod traits;

pub use guard::DivergenceGuard;
pub use logger::Logger;
