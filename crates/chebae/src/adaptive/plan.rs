//! Quantities fixed for the whole run.

use serde::{Deserialize, Serialize};

use chebae_core::constants::ROUND_CAP_MULTIPLIER;

use crate::config::{validate_target, Config};
use crate::error::EstimationError;
use crate::statistics::worst_case_half_width;

/// Derived run constants.
///
/// `alpha_per_round` is the union-bound share of the failure budget: with at
/// most `rounds` refinement rounds, per-round intervals at `α/T` compose into
/// an overall `1 − α` guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunPlan {
    /// Target half-width ε.
    pub epsilon: f64,
    /// Overall failure budget α.
    pub alpha: f64,
    /// Planned refinement rounds T = max(1, ⌈ln(1/2ε) / ln r⌉).
    pub rounds: usize,
    /// Per-round significance α/T.
    pub alpha_per_round: f64,
    /// Worst-case exact-interval half-width for a batch of N_shots at α/T.
    pub worst_case_half_width: f64,
    /// Rounds allowed before the loop is declared runaway.
    pub max_rounds: usize,
}

impl RunPlan {
    /// Validate the inputs and derive the plan.
    ///
    /// # Errors
    ///
    /// [`EstimationError::InvalidConfig`] for any out-of-range input.
    pub fn new(epsilon: f64, alpha: f64, config: &Config) -> Result<Self, EstimationError> {
        validate_target(epsilon, alpha)?;
        config.validate()?;

        let rounds = planned_rounds(epsilon, config.growth_ratio);
        let alpha_per_round = alpha / rounds as f64;
        let worst_case_half_width = worst_case_half_width(alpha_per_round, config.shots)?;

        Ok(Self {
            epsilon,
            alpha,
            rounds,
            alpha_per_round,
            worst_case_half_width,
            max_rounds: rounds.saturating_mul(ROUND_CAP_MULTIPLIER),
        })
    }
}

/// T = ⌈ln(1/2ε) / ln r⌉, at least 1.
fn planned_rounds(epsilon: f64, growth_ratio: f64) -> usize {
    let t = ((1.0 / (2.0 * epsilon)).ln() / growth_ratio.ln()).ceil();
    if t.is_finite() && t >= 1.0 {
        t as usize
    } else {
        1
    }
}
