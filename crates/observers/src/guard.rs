use rootfind_core::Observer;
use tracing::warn;

use crate::traits::{CanStopEarly, HasStepError};

/// Stops a run once its step error has grown for `patience` consecutive
/// iterations.
///
/// The solvers only stop on their own when an iterate stops being finite.
/// Attach this guard to give up on runs that are visibly moving away from a
/// root long before that happens.
#[derive(Debug, Clone)]
pub struct DivergenceGuard {
    patience: usize,
    previous: Option<f64>,
    growing: usize,
}

impl DivergenceGuard {
    /// Creates a guard that tolerates `patience - 1` consecutive increases.
    ///
    /// A patience of zero is treated as one.
    #[must_use]
    pub fn new(patience: usize) -> Self {
        Self {
            patience: patience.max(1),
            previous: None,
            growing: 0,
        }
    }

    #[must_use]
    pub fn patience(&self) -> usize {
        self.patience
    }
}

impl<E, A> Observer<E, A> for DivergenceGuard
where
    E: HasStepError,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let error = event.step_error();
        match self.previous.replace(error) {
            Some(previous) if error > previous => self.growing += 1,
            _ => self.growing = 0,
        }

        if self.growing < self.patience {
            return None;
        }
        warn!(
            patience = self.patience,
            error, "step error keeps growing, stopping"
        );
        Some(A::stop_early())
    }
}

#[cfg(test)]
mod tests {
    use rootfind_solvers::{
        Status,
        fixed_point::{self, Config, Mode},
    };

    use super::*;

    struct Step(f64);

    impl HasStepError for Step {
        fn step_error(&self) -> f64 {
            self.0
        }
    }

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    fn first_stop(patience: usize, errors: &[f64]) -> Option<usize> {
        let mut guard = DivergenceGuard::new(patience);
        errors.iter().position(|&e| {
            let action: Option<Stop> = guard.observe(&Step(e));
            action.is_some()
        })
    }

    #[test]
    fn stops_after_consecutive_growth() {
        assert_eq!(first_stop(2, &[1.0, 2.0, 3.0, 4.0]), Some(2));
        assert_eq!(first_stop(1, &[1.0, 2.0]), Some(1));
    }

    #[test]
    fn shrinking_step_resets_the_count() {
        assert_eq!(first_stop(2, &[1.0, 2.0, 1.5, 3.0, 2.0]), None);
        assert_eq!(first_stop(3, &[1.0, 2.0, 1.0, 2.0, 3.0, 4.0]), Some(5));
    }

    #[test]
    fn zero_patience_acts_like_one() {
        assert_eq!(DivergenceGuard::new(0).patience(), 1);
    }

    #[test]
    fn ends_a_diverging_fixed_point_run() {
        // x ↦ 2x moves away from its fixed point at zero, doubling the step.
        let g = |x: f64| 2.0 * x;
        let config = Config::new(1e-8, 100, Mode::Standard).expect("valid config");

        let solution = fixed_point::solve(&g, 1.0, &config, DivergenceGuard::new(3))
            .expect("closure never fails");

        assert_eq!(solution.trace.status(), Status::StoppedByObserver);
        assert_eq!(solution.trace.len(), 4);
    }

    #[test]
    fn leaves_a_converging_run_alone() {
        let config = Config::default();
        let solution = fixed_point::solve(&f64::cos, 1.0, &config, DivergenceGuard::new(1))
            .expect("closure never fails");

        assert_eq!(solution.trace.status(), Status::Converged);
    }
}
