use crate::Function;

/// Turns expression text into a callable [`Function`].
///
/// Solvers never see expression text; a front end compiles it first and
/// passes the resulting function along. Malformed text is reported by the
/// compiler, not by the solvers.
pub trait Compile {
    type Function: Function;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Compiles `source` into a function.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not a valid expression.
    fn compile(&self, source: &str) -> Result<Self::Function, Self::Error>;
}
