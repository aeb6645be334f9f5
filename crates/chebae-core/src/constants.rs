//! Constants used throughout the estimator.

/// Default deterministic seed for simulated oracles.
///
/// The value `0x636865626165` is "chebae" encoded in ASCII.
pub const DEFAULT_SEED: u64 = 0x636865626165;

// =============================================================================
// Default configuration constants
// =============================================================================

/// Default late-trigger caution factor ν.
///
/// Sampling switches to one shot per iteration once the projected error on `p`
/// drops below `ν·ε`.
pub const DEFAULT_NU: f64 = 8.0;

/// Default degree growth ratio r between successive refinement rounds.
pub const DEFAULT_GROWTH_RATIO: f64 = 2.0;

/// Default bulk batch size N_shots for "early" iterations.
pub const DEFAULT_SHOTS: u64 = 100;

// =============================================================================
// Numeric guards
// =============================================================================

/// Slack subtracted from the lower and added to the upper inverted bound
/// before intersecting, so round-off cannot produce a spuriously empty interval.
pub const INTERVAL_SLACK: f64 = 1e-15;

/// Multiple of the planned round count T allowed before the loop is declared
/// runaway.
pub const ROUND_CAP_MULTIPLIER: usize = 2;

/// Name reported in result records.
pub const ALGORITHM_NAME: &str = "chebae";
