//! Adaptive estimation loop.
//!
//! Each iteration narrows the interval `[p_min, p_max]`:
//!
//! 1. **Degree**: ask for the largest degree above `r·k` that is monotone on
//!    the interval; adopting one starts a new round and clears the tally
//! 2. **Batch size**: early (N_shots samples) or late (one sample)
//! 3. **Sample** the oracle at the current degree
//! 4. **Bound** `T²ₙ(√p)` with an exact binomial interval at `α/T`
//! 5. **Invert** both bounds around the interval midpoint
//! 6. **Intersect** with the current interval, never replace it
//!
//! The loop stops once `p_max − p_min ≤ 2ε`.
//!
//! ## Key Design Decisions
//!
//! - **Run plan computed once**: the round count T, per-round significance
//!   α/T and the worst-case batch half-width depend only on the inputs, so
//!   [`RunPlan`] holds them for any number of runs.
//!
//! - **Rounds, not passes, are capped**: in the late regime a single round
//!   spans many single-sample passes. The cap counts degree adoptions.

mod loop_runner;
mod plan;
mod state;

pub use loop_runner::{adaptive_step, run_adaptive, IterationRecord, StepOutcome};
pub use plan::RunPlan;
pub use state::{EstimationState, Tally};
