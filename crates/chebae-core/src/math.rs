//! Math functions for no_std compatibility.
//!
//! In no_std mode, f64 doesn't have transcendental methods like sqrt, acos, cos, etc.
//! This module provides these functions using libm, plus the clamped variants
//! the estimator needs when confidence bounds drift past `[0, 1]`.

/// Square root.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Cosine.
#[inline]
pub fn cos(x: f64) -> f64 {
    libm::cos(x)
}

/// Arc cosine.
#[inline]
pub fn acos(x: f64) -> f64 {
    libm::acos(x)
}

/// Floor (round down).
#[inline]
pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

/// Absolute value.
#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

/// Square (x^2).
#[inline]
pub fn sq(x: f64) -> f64 {
    x * x
}

/// Clamp to the unit interval `[0, 1]`.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Square root with the argument clamped to `[0, 1]`.
#[inline]
pub fn sqrt_unit(x: f64) -> f64 {
    sqrt(clamp_unit(x))
}

/// Arc cosine with the argument clamped to `[-1, 1]`.
#[inline]
pub fn acos_clamped(x: f64) -> f64 {
    if x.is_nan() {
        return core::f64::consts::FRAC_PI_2;
    }
    acos(x.clamp(-1.0, 1.0))
}
