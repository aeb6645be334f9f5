//! State management for the adaptive estimation loop.

use serde::{Deserialize, Serialize};

use chebae_core::{chebyshev_degree, ProbabilityInterval};

use crate::statistics::StatisticsError;

/// Oracle outcomes accumulated at the current degree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Trials drawn since the last degree change.
    pub flips: u64,
    /// Successes among those trials.
    pub heads: u64,
}

impl Tally {
    /// Fold in a batch of `shots` trials with `heads` successes.
    pub fn record(&mut self, shots: u64, heads: u64) {
        self.flips = self.flips.saturating_add(shots);
        self.heads = self.heads.saturating_add(heads);
    }
}

/// State maintained across iterations of the estimation loop.
///
/// The interval only ever shrinks and `k` only ever grows. The tally holds
/// samples from the current degree alone: samples taken at a different degree
/// estimate a different `T²ₙ`, so mixing them would bias the binomial bound.
#[derive(Debug, Clone)]
pub struct EstimationState {
    interval: ProbabilityInterval,
    k: u64,
    tally: Tally,
    round: usize,
    iterations: usize,
    oracle_calls: u64,
    queries: u64,
}

impl EstimationState {
    /// Fresh state: interval `[0, 1]`, `k = 0`, empty tally, first round.
    pub fn new() -> Self {
        Self {
            interval: ProbabilityInterval::UNIT,
            k: 0,
            tally: Tally::default(),
            round: 1,
            iterations: 0,
            oracle_calls: 0,
            queries: 0,
        }
    }

    /// Current interval on `p`.
    pub fn interval(&self) -> ProbabilityInterval {
        self.interval
    }

    /// Current query parameter `k`.
    pub fn k(&self) -> u64 {
        self.k
    }

    /// Current polynomial degree `2k + 1`.
    pub fn degree(&self) -> u64 {
        chebyshev_degree(self.k)
    }

    /// Samples accumulated at the current degree.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Refinement round in progress, starting at 1.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Loop iterations completed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Oracle trials drawn.
    pub fn oracle_calls(&self) -> u64 {
        self.oracle_calls
    }

    /// Oracle cost in query units: Σ(2k + 1) over every trial.
    pub fn queries(&self) -> u64 {
        self.queries
    }

    /// Switch to a new query parameter, starting a new round with an empty tally.
    pub fn adopt_degree(&mut self, k: u64) {
        self.k = k;
        self.tally = Tally::default();
        self.round += 1;
    }

    /// Account for `shots` trials at the current degree, `heads` of them successes.
    ///
    /// # Errors
    ///
    /// [`StatisticsError::InvalidTally`] if `heads > shots`; the state is left
    /// untouched.
    pub fn record_samples(&mut self, shots: u64, heads: u64) -> Result<(), StatisticsError> {
        if heads > shots {
            return Err(StatisticsError::InvalidTally {
                successes: heads,
                trials: shots,
            });
        }
        self.tally.record(shots, heads);
        self.oracle_calls = self.oracle_calls.saturating_add(shots);
        self.queries = self
            .queries
            .saturating_add(shots.saturating_mul(self.degree()));
        Ok(())
    }

    /// Intersect the interval with `candidate`.
    ///
    /// Returns `false` if the intersection came out empty, in which case the
    /// interval collapses to the midpoint of the crossed bounds.
    pub fn narrow(&mut self, candidate: &ProbabilityInterval) -> bool {
        let next = self.interval.intersect(candidate);
        self.iterations += 1;
        if next.is_empty() {
            self.interval = next.collapsed();
            false
        } else {
            self.interval = next;
            true
        }
    }
}

impl Default for EstimationState {
    fn default() -> Self {
        Self::new()
    }
}
