use std::convert::Infallible;

/// A real-valued function of one real variable.
///
/// Solvers treat a `Function` as a black box: they only ever call it at a
/// point and inspect the returned value. An evaluation may fail, for example
/// when `x` lies outside the function's domain; how a failure is handled is
/// up to the solver.
///
/// Plain closures `Fn(f64) -> f64` implement `Function` and never fail.
/// Wrap a closure returning `Result` in [`Fallible`] to report failures.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function is undefined at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapts a closure returning `Result` into a [`Function`].
///
/// ```rust
/// use rootfind_core::{Fallible, Function};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("negative argument")]
/// struct Negative;
///
/// let sqrt = Fallible(|x: f64| if x < 0.0 { Err(Negative) } else { Ok(x.sqrt()) });
///
/// assert_eq!(sqrt.call(4.0).unwrap(), 2.0);
/// assert!(sqrt.call(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Function for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}
