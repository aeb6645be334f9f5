//! Adaptive estimation loop runner.
//!
//! [`adaptive_step`] runs one iteration against an oracle; [`run_adaptive`]
//! drives it until the interval meets the target half-width.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use chebae_core::{
    decide_sampling_mode, invert_interval, select_degree, DegreeChoice, ProbabilityInterval,
    SamplingMode,
};

use crate::adaptive::{EstimationState, RunPlan, Tally};
use crate::config::Config;
use crate::error::EstimationError;
use crate::oracle::Oracle;
use crate::statistics::{clopper_pearson, BinomialInterval};

/// Snapshot of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// 1-based iteration index.
    pub iteration: usize,
    /// Refinement round the iteration belonged to.
    pub round: usize,
    /// Query parameter used.
    pub k: u64,
    /// Batch regime chosen.
    pub mode: SamplingMode,
    /// Trials drawn this iteration.
    pub shots: u64,
    /// Successes among them.
    pub heads: u64,
    /// Tally at the current degree after this iteration.
    pub tally: Tally,
    /// Exact confidence interval on `T²ₙ(√p)` from the tally.
    pub t2_interval: BinomialInterval,
    /// Interval on `p` after intersection.
    pub interval: ProbabilityInterval,
}

/// Result of a single [`adaptive_step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Interval still wider than `2ε`; call again.
    Continue(IterationRecord),

    /// Interval meets the target.
    ///
    /// Carries the record of the iteration that got it there, or `None` if
    /// the state was already converged and nothing was sampled.
    Converged(Option<IterationRecord>),
}

/// Run one iteration of the estimation loop.
///
/// # Arguments
///
/// * `plan` - Run constants (ε, α/T, worst-case batch half-width, round cap)
/// * `config` - Sampling policy (ν, r, N_shots)
/// * `state` - Loop state, updated in place
/// * `oracle` - Source of trials
///
/// # Errors
///
/// [`EstimationError::RoundCapExceeded`] if adopting a new degree would start
/// more rounds than the plan allows, and [`EstimationError::Statistics`] if the
/// oracle reports more successes than trials.
pub fn adaptive_step<O: Oracle + ?Sized>(
    plan: &RunPlan,
    config: &Config,
    state: &mut EstimationState,
    oracle: &mut O,
) -> Result<StepOutcome, EstimationError> {
    if state.interval().is_converged(plan.epsilon) {
        return Ok(StepOutcome::Converged(None));
    }

    // Step 1: degree, at least r times the current one.
    let min_k = config.growth_ratio * state.k() as f64;
    if let DegreeChoice::Improved(k) = select_degree(&state.interval(), min_k) {
        if k > state.k() {
            debug!(from = state.k(), to = k, round = state.round() + 1, "adopting new degree");
            state.adopt_degree(k);
            if state.round() > plan.max_rounds {
                let iv = state.interval();
                warn!(
                    rounds = state.round(),
                    limit = plan.max_rounds,
                    p_min = iv.lo,
                    p_max = iv.hi,
                    "refinement round cap exceeded"
                );
                return Err(EstimationError::RoundCapExceeded {
                    rounds: state.round(),
                    limit: plan.max_rounds,
                    p_min: iv.lo,
                    p_max: iv.hi,
                });
            }
        }
    }

    // Step 2: batch size.
    let n = state.degree();
    let mode = decide_sampling_mode(
        plan.worst_case_half_width,
        &state.interval(),
        n,
        config.nu,
        plan.epsilon,
    );
    let shots = mode.shots(config.shots);

    // Step 3: sample.
    let heads = oracle.sample_many(state.k(), shots);
    state.record_samples(shots, heads)?;

    // Step 4: bound T²ₙ(√p).
    let tally = state.tally();
    let t2_interval = clopper_pearson(tally.heads, tally.flips, plan.alpha_per_round)?;

    // Steps 5-6: invert around the midpoint, then intersect.
    let p_ref = state.interval().midpoint();
    let candidate = invert_interval(t2_interval.lower, t2_interval.upper, n, p_ref).with_slack();
    if !state.narrow(&candidate) {
        warn!(
            p_min = candidate.lo,
            p_max = candidate.hi,
            "inverted interval disjoint from current interval; collapsing"
        );
    }

    let interval = state.interval();
    let record = IterationRecord {
        iteration: state.iterations(),
        round: state.round(),
        k: state.k(),
        mode,
        shots,
        heads,
        tally,
        t2_interval,
        interval,
    };
    debug!(
        iteration = record.iteration,
        k = record.k,
        mode = ?mode,
        shots,
        heads,
        flips = tally.flips,
        p_min = interval.lo,
        p_max = interval.hi,
        "iteration complete"
    );

    if interval.is_converged(plan.epsilon) {
        Ok(StepOutcome::Converged(Some(record)))
    } else {
        Ok(StepOutcome::Continue(record))
    }
}

/// Run the loop to convergence, passing every iteration record to `observe`.
pub fn run_adaptive<O, F>(
    plan: &RunPlan,
    config: &Config,
    state: &mut EstimationState,
    oracle: &mut O,
    mut observe: F,
) -> Result<(), EstimationError>
where
    O: Oracle + ?Sized,
    F: FnMut(&IterationRecord),
{
    loop {
        match adaptive_step(plan, config, state, oracle)? {
            StepOutcome::Continue(record) => observe(&record),
            StepOutcome::Converged(record) => {
                if let Some(record) = record {
                    observe(&record);
                }
                return Ok(());
            }
        }
    }
}
