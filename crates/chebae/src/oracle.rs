//! The sampling oracle.
//!
//! The estimator only ever sees the oracle through [`Oracle::sample`]: one
//! Bernoulli trial at query parameter `k`, succeeding with probability
//! `T²₂ₖ₊₁(√p)` for a `p` the estimator never learns directly.
//!
//! [`SimulatedOracle`] stands in for a physical device. It owns its random
//! source, so independent runs on different threads never share generator
//! state.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use chebae_core::{chebyshev_degree, t2_rootp};

use crate::error::EstimationError;

/// A source of Bernoulli trials parameterized by query parameter `k`.
pub trait Oracle {
    /// Draw one trial at query parameter `k` (degree `2k + 1`).
    fn sample(&mut self, k: u64) -> bool;

    /// Draw `shots` trials at `k` and return the number of successes.
    fn sample_many(&mut self, k: u64, shots: u64) -> u64 {
        (0..shots).filter(|_| self.sample(k)).count() as u64
    }
}

impl<F> Oracle for F
where
    F: FnMut(u64) -> bool,
{
    fn sample(&mut self, k: u64) -> bool {
        self(k)
    }
}

/// Simulated oracle with a fixed hidden target probability.
#[derive(Debug, Clone)]
pub struct SimulatedOracle<R = Xoshiro256PlusPlus> {
    p_target: f64,
    rng: R,
    calls: u64,
}

impl SimulatedOracle<Xoshiro256PlusPlus> {
    /// Create a simulated oracle with a seeded generator (reproducible).
    pub fn with_seed(p_target: f64, seed: u64) -> Result<Self, EstimationError> {
        Self::new(p_target, Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulatedOracle<R> {
    /// Create a simulated oracle drawing from `rng`.
    ///
    /// # Errors
    ///
    /// [`EstimationError::InvalidTarget`] if `p_target` is outside `[0, 1]`.
    pub fn new(p_target: f64, rng: R) -> Result<Self, EstimationError> {
        if !(0.0..=1.0).contains(&p_target) {
            return Err(EstimationError::InvalidTarget(p_target));
        }
        Ok(Self {
            p_target,
            rng,
            calls: 0,
        })
    }

    /// Heads probability at query parameter `k`.
    pub fn heads_probability(&self, k: u64) -> f64 {
        t2_rootp(chebyshev_degree(k), self.p_target).clamp(0.0, 1.0)
    }

    /// Trials drawn so far.
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl<R: Rng> Oracle for SimulatedOracle<R> {
    fn sample(&mut self, k: u64) -> bool {
        let prob = self.heads_probability(k);
        self.calls = self.calls.saturating_add(1);
        self.rng.random_bool(prob)
    }
}
