//! Builder API for running estimations.

use tracing::info;

use chebae_core::constants::{ALGORITHM_NAME, DEFAULT_SEED};

use crate::adaptive::{run_adaptive, EstimationState, IterationRecord, RunPlan};
use crate::config::Config;
use crate::error::EstimationError;
use crate::oracle::{Oracle, SimulatedOracle};
use crate::result::EstimationResult;

/// Chebyshev amplitude estimator for a fixed accuracy target.
///
/// Construction validates every input and computes the [`RunPlan`] once, so
/// the same estimator can run against many oracles (for example one per
/// thread) without repeating that work. Runs share no mutable state.
///
/// ```
/// use chebae::{ChebyshevEstimator, Config};
///
/// let estimator = ChebyshevEstimator::new(0.05, 0.05, Config::default()).unwrap();
/// let result = estimator.simulate(0.3, 7).unwrap();
/// assert!(result.ci_width <= 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct ChebyshevEstimator {
    config: Config,
    plan: RunPlan,
}

impl ChebyshevEstimator {
    /// Create an estimator for target half-width `epsilon` at failure budget `alpha`.
    ///
    /// # Errors
    ///
    /// [`EstimationError::InvalidConfig`] if `epsilon <= 0`, `alpha ∉ (0, 1)`,
    /// or any [`Config`] field is out of range.
    pub fn new(epsilon: f64, alpha: f64, config: Config) -> Result<Self, EstimationError> {
        let plan = RunPlan::new(epsilon, alpha, &config)?;
        Ok(Self { config, plan })
    }

    /// Create an estimator with the default [`Config`].
    pub fn with_defaults(epsilon: f64, alpha: f64) -> Result<Self, EstimationError> {
        Self::new(epsilon, alpha, Config::default())
    }

    /// Sampling policy.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Derived run constants.
    pub fn plan(&self) -> &RunPlan {
        &self.plan
    }

    /// Run against `oracle` until the interval half-width reaches ε.
    pub fn estimate<O: Oracle + ?Sized>(
        &self,
        oracle: &mut O,
    ) -> Result<EstimationResult, EstimationError> {
        self.run(oracle, |_| {})
    }

    /// Like [`estimate`](Self::estimate), also returning every iteration record.
    pub fn estimate_traced<O: Oracle + ?Sized>(
        &self,
        oracle: &mut O,
    ) -> Result<(EstimationResult, Vec<IterationRecord>), EstimationError> {
        let mut trace = Vec::new();
        let result = self.run(oracle, |record| trace.push(*record))?;
        Ok((result, trace))
    }

    /// Run against a seeded [`SimulatedOracle`] and record the exact error.
    pub fn simulate(&self, p_target: f64, seed: u64) -> Result<EstimationResult, EstimationError> {
        let mut oracle = SimulatedOracle::with_seed(p_target, seed)?;
        Ok(self.estimate(&mut oracle)?.with_target(p_target))
    }

    /// [`simulate`](Self::simulate) with the default seed.
    pub fn simulate_default(&self, p_target: f64) -> Result<EstimationResult, EstimationError> {
        self.simulate(p_target, DEFAULT_SEED)
    }

    fn run<O, F>(&self, oracle: &mut O, observe: F) -> Result<EstimationResult, EstimationError>
    where
        O: Oracle + ?Sized,
        F: FnMut(&IterationRecord),
    {
        let mut state = EstimationState::new();
        run_adaptive(&self.plan, &self.config, &mut state, oracle, observe)?;

        let interval = state.interval();
        let result = EstimationResult {
            algorithm: ALGORITHM_NAME.to_string(),
            config: self.config,
            epsilon: self.plan.epsilon,
            alpha: self.plan.alpha,
            p_target: None,
            p_estimate: interval.midpoint(),
            exact_error: None,
            ci_width: interval.half_width(),
            interval,
            num_queries: state.queries(),
            oracle_calls: state.oracle_calls(),
            final_k: state.k(),
            rounds: state.round(),
            iterations: state.iterations(),
        };
        info!(
            p_estimate = result.p_estimate,
            ci_width = result.ci_width,
            queries = result.num_queries,
            rounds = result.rounds,
            "estimation converged"
        );
        Ok(result)
    }
}
