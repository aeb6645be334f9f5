//! Early/late sampling decision.
//!
//! Noise on the estimate of `T²ₙ(√p)` reaches `p` amplified by the inverse slope
//! of the polynomial over the current interval. While that amplified noise is
//! still large the estimator samples in bulk ("early"); once it is already
//! comfortably below the target it samples one shot at a time ("late") so the
//! loop can stop as soon as the interval is narrow enough.

use crate::chebyshev::t2_rootp;
use crate::interval::ProbabilityInterval;
use crate::math::abs;

/// Batch-size regime for one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingMode {
    /// Take a full batch of `N_shots` samples.
    Early,
    /// Take a single sample.
    Late,
}

impl SamplingMode {
    /// Samples to draw this iteration.
    pub fn shots(&self, batch: u64) -> u64 {
        match self {
            SamplingMode::Early => batch,
            SamplingMode::Late => 1,
        }
    }
}

/// Decide between bulk and single-shot sampling at degree `n`.
///
/// Late iff `worst_case_half_width · (p_max − p_min) / |T²ₙ(√p_max) − T²ₙ(√p_min)| < ν·ε`.
/// A zero or non-finite ratio denominator is treated as early.
///
/// # Arguments
///
/// * `worst_case_half_width` - Largest binomial CI half-width at the bulk batch size
/// * `interval` - Current interval on `p`
/// * `n` - Polynomial degree in use
/// * `nu` - Late-trigger caution factor
/// * `epsilon` - Target half-width
pub fn decide_sampling_mode(
    worst_case_half_width: f64,
    interval: &ProbabilityInterval,
    n: u64,
    nu: f64,
    epsilon: f64,
) -> SamplingMode {
    let gap = abs(t2_rootp(n, interval.hi) - t2_rootp(n, interval.lo));
    if !(gap > 0.0) {
        return SamplingMode::Early;
    }
    let projected = worst_case_half_width * interval.width() / gap;
    if projected.is_finite() && projected < nu * epsilon {
        SamplingMode::Late
    } else {
        SamplingMode::Early
    }
}
