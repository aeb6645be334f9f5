//! Numeric core for Chebyshev amplitude estimation.
//!
//! The estimator observes a Bernoulli oracle whose heads probability at query
//! parameter `k` is `T²ₙ(√p)` with `n = 2k + 1`. This crate holds the pieces of
//! the estimator that are pure functions of the current uncertainty interval:
//!
//! - [`chebyshev`]: the angle map `θ(p) = arccos(√p)` and `T²ₙ(√p)`
//! - [`degree`]: the largest degree that is monotone over an interval
//! - [`inversion`]: mapping a confidence interval on `T²ₙ(√p)` back onto `p`
//! - [`sampling`]: the early/late batch-size decision
//! - [`interval`]: the confidence interval on `p` itself
//!
//! It works in `no_std` environments; transcendental functions go through
//! [`math`], which wraps `libm`.
//!
//! # Features
//!
//! - `std` (default): standard library support and serde derives

#![cfg_attr(not(feature = "std"), no_std)]

pub mod chebyshev;
pub mod constants;
pub mod degree;
pub mod interval;
pub mod inversion;
pub mod math;
pub mod sampling;

pub use chebyshev::{chebyshev_degree, t2_rootp, theta_of};
pub use degree::{select_degree, DegreeChoice};
pub use interval::ProbabilityInterval;
pub use inversion::{invert_interval, invert_t2_rootp};
pub use sampling::{decide_sampling_mode, SamplingMode};
