use super::Record;

/// Event emitted by the regula falsi solver after each step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record for this step, before it is appended to the trace.
    pub record: &'a Record,

    /// Function value at the step's left endpoint.
    pub fa: f64,

    /// Function value at the step's right endpoint.
    pub fb: f64,
}
