/// Control actions supported by the regula falsi solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the records produced so far.
    StopEarly,
}
