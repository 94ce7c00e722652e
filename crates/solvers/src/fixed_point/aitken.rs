use rootfind_core::{Function, Observer};
use tracing::warn;

use crate::{Status, Trace};

use super::{Action, Config, Error, Event, Record, Solution, eval, stop_status};

/// Denominators smaller than this end the run as degenerate.
pub(super) const DENOMINATOR_TOL: f64 = 1e-12;

/// Aitken Δ² extrapolation from three successive iterates.
///
/// Returns `None` when the second difference is too small to divide by.
pub(super) fn extrapolate(x: f64, x1: f64, x2: f64) -> Option<f64> {
    let denominator = (x2 - x1) - (x1 - x);
    if denominator.abs() < DENOMINATOR_TOL {
        return None;
    }
    Some(x - (x1 - x).powi(2) / denominator)
}

pub(super) fn accelerated<G, Obs>(
    g: &G,
    x0: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    G: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut points = vec![x0];
    let mut records = Vec::new();
    let mut x = x0;

    let status = 'run: {
        for iter in 1..=config.max_iters() {
            let x1 = eval(g, x)?;
            let x2 = eval(g, x1)?;
            points.extend([x1, x2]);

            let Some(next) = extrapolate(x, x1, x2) else {
                warn!(iter, x, x1, x2, "Aitken denominator vanished, stopping");
                break 'run Status::Degenerate;
            };

            let record = Record {
                iter,
                x: next,
                error: (next - x).abs(),
            };
            let action = observer.observe(&Event {
                record: &record,
                points: &points[points.len() - 2..],
            });
            records.push(record);

            if let Some(status) = stop_status(&record, action, config) {
                break 'run status;
            }
            x = next;
        }
        Status::MaxIters
    };

    Ok(Solution::new(Trace::new(records, status), points))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn extrapolation_is_exact_for_linear_maps() {
        // g(x) = 0.5x + 1 has fixed point 2; iterates from 0 are 1, 1.5.
        let x = extrapolate(0.0, 1.0, 1.5).expect("non-degenerate");
        assert_relative_eq!(x, 2.0);
    }

    #[test]
    fn collinear_iterates_are_degenerate() {
        assert!(extrapolate(0.0, 1.0, 2.0).is_none());
        assert!(extrapolate(2.0, 2.0, 2.0).is_none());
    }

    #[test]
    fn nan_iterates_are_not_degenerate() {
        // NaN propagates so the caller can flag divergence.
        let x = extrapolate(0.0, f64::NAN, 1.0).expect("NaN is not below tolerance");
        assert!(x.is_nan());
    }
}
