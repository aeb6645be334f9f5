//! # chebae
//!
//! Estimate an unknown probability `p` from a noisy binary oracle using
//! Chebyshev amplitude estimation.
//!
//! The oracle answers "heads" at query parameter `k` with probability
//! `T²ₙ(√p)`, `n = 2k + 1`, at a cost of `n` query units. Higher degrees carry
//! more information per query but oscillate, so the estimator only uses a
//! degree that is monotone over its current uncertainty interval. Each run
//! outputs:
//! - A point estimate and confidence interval of half-width at most ε
//! - A failure probability of at most α (per-round significance α/T)
//! - The total oracle cost in query units
//!
//! ## Quick Start
//!
//! ```
//! use chebae::{ChebyshevEstimator, Config, SimulatedOracle};
//!
//! let estimator = ChebyshevEstimator::new(0.01, 0.05, Config::default()).unwrap();
//!
//! // Any `Oracle` works; a simulated device owns its own seeded generator.
//! let mut oracle = SimulatedOracle::with_seed(0.3, 42).unwrap();
//! let result = estimator.estimate(&mut oracle).unwrap();
//!
//! assert!(result.ci_width <= 0.01);
//! println!("p = {:.4} ± {:.4} ({} queries)", result.p_estimate, result.ci_width, result.num_queries);
//! ```
//!
//! Closures `FnMut(u64) -> bool` are oracles too, which is the usual way to
//! plug in real hardware.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod estimator;
mod oracle;
mod result;

// Functional modules
pub mod adaptive;
pub mod statistics;

// Re-exports for public API
pub use config::Config;
pub use error::EstimationError;
pub use estimator::ChebyshevEstimator;
pub use oracle::{Oracle, SimulatedOracle};
pub use result::EstimationResult;

pub use chebae_core::constants;
pub use chebae_core::{
    chebyshev_degree, decide_sampling_mode, invert_interval, invert_t2_rootp, select_degree,
    t2_rootp, theta_of, DegreeChoice, ProbabilityInterval, SamplingMode,
};
