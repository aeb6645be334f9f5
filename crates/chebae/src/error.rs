//! Error types for estimation runs.

use crate::statistics::StatisticsError;

/// Errors that can stop an estimation run.
///
/// Configuration problems are reported before the oracle is ever queried.
/// [`EstimationError::RoundCapExceeded`] is different in kind: it signals that
/// the loop broke its own termination invariant, not that the caller erred.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimationError {
    /// A configuration value is out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Which value was rejected and why.
        message: String,
    },

    /// A simulated target probability outside `[0, 1]`.
    #[error("Invalid target probability {0}: must be in [0, 1]")]
    InvalidTarget(f64),

    /// The loop used more refinement rounds than the run plan allows.
    #[error(
        "Refinement round cap exceeded: {rounds} rounds (limit {limit}) with interval [{p_min}, {p_max}]"
    )]
    RoundCapExceeded {
        /// Rounds started, including the one that tripped the cap.
        rounds: usize,
        /// Allowed rounds.
        limit: usize,
        /// Interval lower bound when the cap tripped.
        p_min: f64,
        /// Interval upper bound when the cap tripped.
        p_max: f64,
    },

    /// A binomial confidence interval could not be computed.
    #[error(transparent)]
    Statistics(#[from] StatisticsError),
}

impl EstimationError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        EstimationError::InvalidConfig {
            message: message.into(),
        }
    }

    /// True for errors caused by caller input rather than an internal fault.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            EstimationError::InvalidConfig { .. } | EstimationError::InvalidTarget(_)
        )
    }
}
