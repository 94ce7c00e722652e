/// The condition that ended a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The function value at the last estimate fell below machine epsilon.
    ZeroResidual,

    /// The step error fell below the configured tolerance.
    Converged,

    /// Reached the iteration limit without meeting a stopping criterion.
    MaxIters,

    /// A near-zero denominator made the next step undefined.
    ///
    /// The trace holds every record produced before the degenerate step.
    Degenerate,

    /// An iterate became NaN or infinite.
    Diverged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns true if the run ended on a convergence criterion.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(self, Self::ZeroResidual | Self::Converged)
    }
}

/// The ordered iteration history of a solver run, oldest record first.
///
/// A trace is built once by a solver and returned by value. Convergence can be
/// judged from the final record or from [`Trace::status`].
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<R> {
    records: Vec<R>,
    status: Status,
}

impl<R> Trace<R> {
    pub(crate) fn new(records: Vec<R>, status: Status) -> Self {
        Self { records, status }
    }

    /// Returns the records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the condition that ended the run.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the run produced no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Consumes the trace and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
