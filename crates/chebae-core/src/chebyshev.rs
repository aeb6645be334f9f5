//! Chebyshev polynomials evaluated on the amplitude `√p`.
//!
//! With `√p = cos θ`, `Tₙ(√p) = cos(nθ)`, so the oracle's heads probability is
//! `T²ₙ(√p) = cos²(nθ) = (1 + cos 2nθ) / 2`. Everything downstream works in the
//! angle domain `θ ∈ [0, π/2]`, which is decreasing in `p`.

use crate::math::{acos_clamped, cos, sq, sqrt_unit};

/// Polynomial degree `n = 2k + 1` for query parameter `k`.
#[inline]
pub fn chebyshev_degree(k: u64) -> u64 {
    2 * k + 1
}

/// Angle `θ = arccos(√p)` with `p` clamped to `[0, 1]`.
#[inline]
pub fn theta_of(p: f64) -> f64 {
    acos_clamped(sqrt_unit(p))
}

/// `T²ₙ(√p)` for degree `n`.
///
/// Uses the trigonometric form, which is exact on `[0, 1]` and stays inside
/// `[0, 1]` for any `n`.
#[inline]
pub fn t2_rootp(n: u64, p: f64) -> f64 {
    sq(cos(n as f64 * theta_of(p)))
}
