//! Core traits for the rootfind engine.
//!
//! This crate defines the shared abstractions that the solvers, observers,
//! and expression compiler build on:
//!
//! - [`Function`]: a real-valued function of one real variable
//! - [`Compile`]: a capability that turns expression text into a [`Function`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod compile;
mod function;
mod observer;

pub use compile::Compile;
pub use function::{Fallible, Function};
pub use observer::Observer;
