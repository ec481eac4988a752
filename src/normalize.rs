use crate::constants::normalize::{
    DEGENERATE_MIDPOINT, DEGENERATE_RANGE_EPSILON, FALLBACK_MAX, FALLBACK_MIN,
};

/// An observed value range used for min-max normalization.
///
/// Projections scan their inputs once with [`MinMax::of`] and then map
/// individual values through [`MinMax::normalize`]. The range carries the
/// shared degenerate-range policy: when max and min are (nearly) equal,
/// every value maps to the 0.5 midpoint instead of dividing by a vanishing
/// span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMax {
    /// Smallest finite value observed, or the fallback lower bound.
    pub min: f64,
    /// Largest finite value observed, or the fallback upper bound.
    pub max: f64,
}

impl MinMax {
    /// Scan `values` for their raw minimum and maximum.
    ///
    /// NaN values never win a comparison. An empty or all-NaN input leaves
    /// non-finite bounds, which fall back to `[0, 1]` so normalization stays
    /// well defined downstream.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            min = min.min(value);
            max = max.max(value);
        }
        if !min.is_finite() {
            min = FALLBACK_MIN;
        }
        if !max.is_finite() {
            max = FALLBACK_MAX;
        }
        Self { min, max }
    }

    /// Distance between the bounds.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the range is too narrow to normalize against.
    pub fn is_degenerate(&self) -> bool {
        self.span() < DEGENERATE_RANGE_EPSILON
    }

    /// Map `value` onto `[0, 1]` relative to this range.
    ///
    /// Degenerate ranges map every value, including out-of-range ones, to
    /// the midpoint 0.5. Non-degenerate ranges do not clamp; callers that
    /// need a hard `[0, 1]` guarantee apply [`clamp01`] themselves.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return DEGENERATE_MIDPOINT;
        }
        (value - self.min) / self.span()
    }
}

impl Default for MinMax {
    fn default() -> Self {
        Self {
            min: FALLBACK_MIN,
            max: FALLBACK_MAX,
        }
    }
}

/// Guarded division: `numerator / denominator`, or 0.0 when the denominator
/// is zero or negative.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Square-root compression for `[0, 1]` scalars.
///
/// Boosts small values so heavily skewed distributions (view counts above
/// all) stay visually distinguishable near zero. Input is clamped before
/// the root, so the output is always in `[0, 1]`.
pub fn sqrt_compress(x01: f64) -> f64 {
    clamp01(x01).sqrt()
}

/// Clamp `value` into `[0, 1]`.
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
