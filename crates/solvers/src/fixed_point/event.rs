use super::Record;

/// Event emitted by the fixed-point solver after each step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record for this step, before it is appended to the trace.
    pub record: &'a Record,

    /// Points at which `g` was evaluated during this step.
    ///
    /// One point in standard mode, two in Aitken mode.
    pub points: &'a [f64],
}
