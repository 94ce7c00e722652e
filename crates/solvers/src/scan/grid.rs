use crate::Interval;

use super::InvalidArgument;

/// Sample points `lo, lo + delta, …, hi` of a bracket scan.
///
/// Points are computed as `lo + k·delta` rather than by repeated addition, and
/// the final point is exactly `hi` regardless of how `delta` divides the
/// range. The grid is produced lazily so a fine step over a wide range never
/// allocates.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    lo: f64,
    hi: f64,
    delta: f64,
    index: u64,
    done: bool,
}

impl Grid {
    /// Validates the scan arguments and creates the grid.
    pub(super) fn new(range: Interval, delta: f64) -> Result<Self, InvalidArgument> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(InvalidArgument::Step { delta });
        }
        for value in range.as_array() {
            if !value.is_finite() {
                return Err(InvalidArgument::Bound { value });
            }
        }

        Ok(Self {
            lo: range.lo(),
            hi: range.hi(),
            delta,
            index: 0,
            done: false,
        })
    }
}

impl Iterator for Grid {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let x = self.lo + self.index as f64 * self.delta;

        // Stop one step short when the next point would land on `hi` within
        // rounding, so `hi` is not emitted twice.
        let slack = self.delta * 1e-9;
        if x < self.hi - slack {
            self.index += 1;
            Some(x)
        } else {
            self.done = true;
            Some(self.hi)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn points(lo: f64, hi: f64, delta: f64) -> Vec<f64> {
        Grid::new(Interval::new(lo, hi), delta)
            .expect("valid grid")
            .collect()
    }

    #[test]
    fn includes_both_ends_when_step_divides_range() {
        let xs = points(-3.0, 3.0, 0.5);
        assert_eq!(xs.len(), 13);
        assert_relative_eq!(xs[0], -3.0);
        assert_relative_eq!(xs[6], 0.0);
        assert_eq!(xs[12], 3.0);
    }

    #[test]
    fn forces_last_point_to_upper_bound() {
        let xs = points(0.0, 1.0, 0.3);
        assert_eq!(xs.len(), 5);
        assert_relative_eq!(xs[3], 0.9, epsilon = 1e-12);
        assert_eq!(xs[4], 1.0);
    }

    #[test]
    fn does_not_duplicate_upper_bound_after_drift() {
        // 0.1 * 3 is 0.30000000000000004, a hair above the bound.
        let xs = points(0.0, 0.3, 0.1);
        assert_eq!(xs.len(), 4);
        assert_eq!(xs[3], 0.3);
    }

    #[test]
    fn step_wider_than_range_gives_endpoints() {
        assert_eq!(points(1.0, 2.0, 10.0), vec![1.0, 2.0]);
    }

    #[test]
    fn degenerate_range_is_a_single_point() {
        assert_eq!(points(2.0, 2.0, 0.5), vec![2.0]);
    }

    #[test]
    fn rejects_bad_step() {
        let range = Interval::new(0.0, 1.0);
        assert!(matches!(
            Grid::new(range, 0.0),
            Err(InvalidArgument::Step { .. })
        ));
        assert!(matches!(
            Grid::new(range, -0.5),
            Err(InvalidArgument::Step { .. })
        ));
        assert!(matches!(
            Grid::new(range, f64::NAN),
            Err(InvalidArgument::Step { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let range = Interval::new(0.0, f64::INFINITY);
        assert!(matches!(
            Grid::new(range, 0.5),
            Err(InvalidArgument::Bound { .. })
        ));
    }
}
