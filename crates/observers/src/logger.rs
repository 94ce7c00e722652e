use rootfind_core::Observer;
use tracing::debug;

use crate::traits::{HasEstimate, HasStepError};

/// Emits a `debug` event for every iteration and never intervenes.
///
/// The label is attached to each event so concurrent runs (one per bracket,
/// say) can be told apart in the log.
#[derive(Debug, Clone)]
pub struct Logger {
    label: String,
}

impl Logger {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<E, A> Observer<E, A> for Logger
where
    E: HasEstimate + HasStepError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        debug!(
            run = %self.label,
            iter = event.iter(),
            estimate = event.estimate(),
            error = event.step_error(),
            "iteration"
        );
        None
    }
}
