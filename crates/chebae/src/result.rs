//! Result record for a completed estimation run.

use std::fmt;

use serde::{Deserialize, Serialize};

use chebae_core::ProbabilityInterval;

use crate::config::Config;

/// Outcome of one converged run.
///
/// Built once when the loop stops; fields are plain data for downstream
/// reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// Sampling policy used.
    pub config: Config,
    /// Target half-width ε.
    pub epsilon: f64,
    /// Failure budget α.
    pub alpha: f64,
    /// True probability, known only in simulation.
    pub p_target: Option<f64>,
    /// Point estimate: midpoint of the final interval.
    pub p_estimate: f64,
    /// `|p_estimate − p_target|`, known only in simulation.
    pub exact_error: Option<f64>,
    /// Half-width of the final interval.
    pub ci_width: f64,
    /// Final interval on `p`.
    pub interval: ProbabilityInterval,
    /// Oracle cost in query units, Σ(2k + 1) over every trial.
    pub num_queries: u64,
    /// Number of oracle trials.
    pub oracle_calls: u64,
    /// Query parameter in use at the end.
    pub final_k: u64,
    /// Refinement rounds used.
    pub rounds: usize,
    /// Loop iterations.
    pub iterations: usize,
}

impl EstimationResult {
    /// Attach the simulated target and fill in the exact error.
    pub fn with_target(mut self, p_target: f64) -> Self {
        self.p_target = Some(p_target);
        self.exact_error = Some((self.p_estimate - p_target).abs());
        self
    }

    /// True if the final interval contains the target (simulation only).
    pub fn covers_target(&self) -> Option<bool> {
        self.p_target.map(|p| self.interval.contains(p))
    }
}

impl fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: p = {:.6} ± {:.6} (ε = {}, α = {}) after {} queries, {} rounds, k = {}",
            self.algorithm,
            self.p_estimate,
            self.ci_width,
            self.epsilon,
            self.alpha,
            self.num_queries,
            self.rounds,
            self.final_k
        )?;
        if let (Some(target), Some(err)) = (self.p_target, self.exact_error) {
            write!(f, " [target {target:.6}, error {err:.2e}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converged_at(lo: f64, hi: f64) -> EstimationResult {
        let interval = ProbabilityInterval { lo, hi };
        EstimationResult {
            algorithm: "chebae".to_string(),
            config: Config::default(),
            epsilon: 0.05,
            alpha: 0.05,
            p_target: None,
            p_estimate: interval.midpoint(),
            exact_error: None,
            ci_width: interval.half_width(),
            interval,
            num_queries: 10,
            oracle_calls: 10,
            final_k: 0,
            rounds: 1,
            iterations: 10,
        }
    }

    #[test]
    fn coverage_needs_a_target() {
        assert_eq!(converged_at(0.2, 0.3).covers_target(), None);
    }

    #[test]
    fn coverage_is_interval_membership() {
        let result = converged_at(0.2, 0.3);
        assert_eq!(result.clone().with_target(0.25).covers_target(), Some(true));
        assert_eq!(result.clone().with_target(0.3).covers_target(), Some(true));
        assert_eq!(result.with_target(0.31).covers_target(), Some(false));
    }

    #[test]
    fn exact_error_is_distance_to_estimate() {
        let result = converged_at(0.2, 0.3).with_target(0.22);
        assert!((result.exact_error.unwrap() - 0.03).abs() < 1e-12);
        assert!(result.to_string().contains("target 0.220000"));
    }
}
