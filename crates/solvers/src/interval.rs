/// A closed interval `[lo, hi]` with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// Creates an interval from two endpoints in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Returns the endpoints as `[lo, hi]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Returns true if `x` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }
}

impl From<[f64; 2]> for Interval {
    fn from([a, b]: [f64; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Returns true if `fa * fb <= 0`, i.e. the values straddle or touch zero.
///
/// Compares signs instead of multiplying so that tiny or huge values cannot
/// underflow or overflow the product. NaN never straddles zero.
pub(crate) fn straddles_zero(fa: f64, fb: f64) -> bool {
    if fa.is_nan() || fb.is_nan() {
        return false;
    }
    #[allow(clippy::float_cmp)]
    let touches = fa == 0.0 || fb == 0.0;
    touches || (fa < 0.0) != (fb < 0.0)
}
