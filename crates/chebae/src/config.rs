//! Configuration for adaptive Chebyshev amplitude estimation.

use serde::{Deserialize, Serialize};

use chebae_core::constants::{DEFAULT_GROWTH_RATIO, DEFAULT_NU, DEFAULT_SHOTS};

use crate::error::EstimationError;

/// Sampling policy for a run.
///
/// The accuracy target ε and failure budget α are run inputs, passed to
/// [`ChebyshevEstimator::new`](crate::ChebyshevEstimator::new) alongside this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Late-trigger caution factor ν.
    ///
    /// Sampling switches from batches to single shots once the projected
    /// error on `p` falls below `ν·ε`. Larger values switch sooner.
    /// Default: 8.
    pub nu: f64,

    /// Degree growth ratio r.
    ///
    /// A new degree is only adopted if it exceeds `r` times the current one,
    /// which bounds the number of refinement rounds by `log_r(1/2ε)`.
    /// Must be > 1. Default: 2.
    pub growth_ratio: f64,

    /// Bulk batch size N_shots for "early" iterations.
    ///
    /// Default: 100.
    pub shots: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nu: DEFAULT_NU,
            growth_ratio: DEFAULT_GROWTH_RATIO,
            shots: DEFAULT_SHOTS,
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the late-trigger caution factor.
    pub fn nu(mut self, nu: f64) -> Self {
        self.nu = nu;
        self
    }

    /// Builder method to set the degree growth ratio.
    pub fn growth_ratio(mut self, ratio: f64) -> Self {
        self.growth_ratio = ratio;
        self
    }

    /// Builder method to set the bulk batch size.
    pub fn shots(mut self, shots: u64) -> Self {
        self.shots = shots;
        self
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns [`EstimationError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), EstimationError> {
        if !(self.nu.is_finite() && self.nu > 0.0) {
            return Err(EstimationError::invalid_config(format!(
                "nu must be finite and > 0, got {}",
                self.nu
            )));
        }
        if !(self.growth_ratio.is_finite() && self.growth_ratio > 1.0) {
            return Err(EstimationError::invalid_config(format!(
                "growth_ratio must be finite and > 1, got {}",
                self.growth_ratio
            )));
        }
        if self.shots == 0 {
            return Err(EstimationError::invalid_config("shots must be > 0"));
        }
        Ok(())
    }
}

/// Check the accuracy target and failure budget.
pub(crate) fn validate_target(epsilon: f64, alpha: f64) -> Result<(), EstimationError> {
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(EstimationError::invalid_config(format!(
            "epsilon must be finite and > 0, got {epsilon}"
        )));
    }
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(EstimationError::invalid_config(format!(
            "alpha must be in (0, 1), got {alpha}"
        )));
    }
    Ok(())
}
