//! Degree selection.
//!
//! Given the current interval `[p_min, p_max]`, find the largest odd degree
//! `n = 2k + 1` for which `T²ₙ(√p)` has no interior turning point on the
//! interval. In the angle domain `T²ₙ(√p) = (1 + cos 2nθ) / 2` turns at every
//! multiple of `π/(2n)`, so the test is whether `[θ_lo, θ_hi]` sits inside a
//! single half-period: `⌊2nθ_lo/π⌋ == ⌊2nθ_hi/π⌋`.
//!
//! A monotone polynomial on the interval is what lets [`crate::inversion`]
//! map a confidence interval on `T²ₙ` back onto `p` without branch ambiguity.

use core::f64::consts::{FRAC_PI_2, PI};

use crate::chebyshev::theta_of;
use crate::interval::ProbabilityInterval;
use crate::math::floor;

/// Outcome of a degree search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum DegreeChoice {
    /// A degree above the floor was found; carries `k` where `n = 2k + 1`.
    Improved(u64),
    /// No odd degree above the floor is monotone on the interval.
    /// The caller keeps its current degree and tally.
    NoImprovement,
}

impl DegreeChoice {
    /// The improved `k`, if any.
    pub fn k(&self) -> Option<u64> {
        match self {
            DegreeChoice::Improved(k) => Some(*k),
            DegreeChoice::NoImprovement => None,
        }
    }
}

/// Find the largest `k` whose degree `2k + 1` exceeds `2·min_k + 1` and keeps
/// `T²ₙ(√p)` monotone on `interval`.
///
/// `min_k` is a float so non-integer growth ratios (`r·k`) compare exactly.
///
/// # Arguments
///
/// * `interval` - Current uncertainty interval on `p`
/// * `min_k` - Degree floor; only degrees strictly above `2·min_k + 1` qualify
pub fn select_degree(interval: &ProbabilityInterval, min_k: f64) -> DegreeChoice {
    // θ is decreasing in p.
    let theta_lo = theta_of(interval.hi);
    let theta_hi = theta_of(interval.lo);
    let spread = theta_hi - theta_lo;
    if !(spread > 0.0) {
        return DegreeChoice::NoImprovement;
    }

    let start = floor(FRAC_PI_2 / spread);
    if !start.is_finite() || start < 1.0 {
        return DegreeChoice::NoImprovement;
    }
    let mut n = start as u64;
    if n % 2 == 0 {
        n -= 1;
    }

    let floor_degree = 2.0 * min_k.max(0.0) + 1.0;
    while (n as f64) > floor_degree {
        let scale = 2.0 * n as f64 / PI;
        if floor(scale * theta_lo) == floor(scale * theta_hi) {
            return DegreeChoice::Improved((n - 1) / 2);
        }
        n -= 2;
    }
    DegreeChoice::NoImprovement
}

/// True if `T²ₙ(√p)` has no interior turning point on `interval`.
///
/// Turning points on the endpoints are allowed, so this is slightly looser
/// than the floor test [`select_degree`] applies.
pub fn is_monotone_on(n: u64, interval: &ProbabilityInterval) -> bool {
    let scale = 2.0 * n as f64 / PI;
    let lo = scale * theta_of(interval.hi);
    let hi = scale * theta_of(interval.lo);
    hi <= floor(lo) + 1.0
}
