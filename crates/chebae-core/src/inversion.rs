//! Inverting `T²ₙ(√p)` back onto `p`.
//!
//! `T²ₙ(√p) = v` has many solutions: in the angle domain it reads
//! `cos(2nθ) = 2v - 1`, whose solutions repeat every half-period `π/(2n)`,
//! alternating between a rising and a falling branch. A reference point picks
//! the half-period; the parity of that half-period picks the branch.

use core::f64::consts::PI;

use crate::chebyshev::theta_of;
use crate::interval::ProbabilityInterval;
use crate::math::{acos_clamped, clamp_unit, cos, floor, sq};

/// Solve `T²ₙ(√p) = t2` for the `p` lying in the same half-period as `p_ref`.
///
/// `t2` is clamped to `[0, 1]` first, so confidence bounds that overshoot by
/// round-off still invert.
///
/// # Arguments
///
/// * `t2` - Value of `T²ₙ(√p)`
/// * `n` - Polynomial degree (`2k + 1` for query parameter `k`)
/// * `p_ref` - Reference point selecting the solution branch
pub fn invert_t2_rootp(t2: f64, n: u64, p_ref: f64) -> f64 {
    let n_f = n.max(1) as f64;
    let theta_ref = theta_of(p_ref);
    let half_period = PI / (2.0 * n_f);
    let t = floor(theta_ref / half_period) as u64;

    let base = acos_clamped(2.0 * clamp_unit(t2) - 1.0) / (2.0 * n_f);
    let within = if t % 2 == 0 {
        base
    } else {
        2.0 * half_period - base
    };
    let theta = within + PI * (t / 2) as f64 / n_f;
    sq(cos(theta))
}

/// Invert a confidence interval `[t2_lo, t2_hi]` on `T²ₙ(√p)` into an interval
/// on `p`, sharing one reference for both bounds.
///
/// The polynomial may be decreasing on the branch, so the two images are
/// re-ordered rather than assumed to arrive as `(min, max)`.
pub fn invert_interval(t2_lo: f64, t2_hi: f64, n: u64, p_ref: f64) -> ProbabilityInterval {
    let a = invert_t2_rootp(t2_lo, n, p_ref);
    let b = invert_t2_rootp(t2_hi, n, p_ref);
    ProbabilityInterval::ordered(a, b)
}
