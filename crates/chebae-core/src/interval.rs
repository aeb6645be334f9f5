//! Confidence interval on the unknown probability `p`.

use crate::constants::INTERVAL_SLACK;

/// Closed interval `[lo, hi] ⊆ [0, 1]` believed to contain `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbabilityInterval {
    /// Lower bound `p_min`.
    pub lo: f64,
    /// Upper bound `p_max`.
    pub hi: f64,
}

impl ProbabilityInterval {
    /// The uninformative interval `[0, 1]`.
    pub const UNIT: Self = Self { lo: 0.0, hi: 1.0 };

    /// Build an interval from two bounds in either order.
    pub fn ordered(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// `p_max - p_min`.
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Half of [`width`](Self::width); the reported CI half-width.
    pub fn half_width(&self) -> f64 {
        0.5 * self.width()
    }

    /// Midpoint; the point estimate and the inversion reference.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// True once the interval is narrow enough for target half-width `epsilon`.
    pub fn is_converged(&self, epsilon: f64) -> bool {
        self.width() <= 2.0 * epsilon
    }

    /// True if `p` lies inside the interval.
    pub fn contains(&self, p: f64) -> bool {
        self.lo <= p && p <= self.hi
    }

    /// Widen both sides by [`INTERVAL_SLACK`].
    pub fn with_slack(&self) -> Self {
        Self {
            lo: self.lo - INTERVAL_SLACK,
            hi: self.hi + INTERVAL_SLACK,
        }
    }

    /// Intersection with `other`.
    ///
    /// The result can be empty (`lo > hi`) when the two intervals are
    /// disjoint; callers decide how to treat that.
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            lo: self.lo.max(other.lo),
            hi: self.hi.min(other.hi),
        }
    }

    /// True if `lo > hi`.
    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Collapse an empty interval onto the midpoint of its crossed bounds.
    pub fn collapsed(&self) -> Self {
        let mid = self.midpoint();
        Self { lo: mid, hi: mid }
    }
}

impl Default for ProbabilityInterval {
    fn default() -> Self {
        Self::UNIT
    }
}
