//! Exact binomial confidence intervals.
//!
//! For `s` successes in `m` trials at significance `δ` the two-sided interval is
//!
//! - lower = `δ/2` quantile of `Beta(s, m − s + 1)`, or 0 when `s = 0`
//! - upper = `1 − δ/2` quantile of `Beta(s + 1, m − s)`, or 1 when `s = m`
//!
//! which has coverage at least `1 − δ` for every true proportion.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, ContinuousCDF};

/// Errors from binomial interval computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatisticsError {
    /// Tally with no trials or more successes than trials.
    #[error("Invalid tally: {successes} successes in {trials} trials")]
    InvalidTally {
        /// Successes observed.
        successes: u64,
        /// Trials run.
        trials: u64,
    },

    /// Significance outside `(0, 1)`.
    #[error("Invalid significance {0}: must be in (0, 1)")]
    InvalidSignificance(f64),

    /// The Beta distribution rejected its parameters.
    #[error("Beta quantile failed: {message}")]
    Distribution {
        /// Message from the distribution constructor.
        message: String,
    },
}

/// Two-sided confidence interval for a binomial proportion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinomialInterval {
    /// Lower confidence bound.
    pub lower: f64,
    /// Upper confidence bound.
    pub upper: f64,
}

impl BinomialInterval {
    /// Half of `upper - lower`.
    pub fn half_width(&self) -> f64 {
        0.5 * (self.upper - self.lower)
    }
}

fn beta_quantile(a: f64, b: f64, q: f64) -> Result<f64, StatisticsError> {
    let dist = Beta::new(a, b).map_err(|e| StatisticsError::Distribution {
        message: e.to_string(),
    })?;
    Ok(dist.inverse_cdf(q).clamp(0.0, 1.0))
}

fn check_significance(significance: f64) -> Result<(), StatisticsError> {
    if significance > 0.0 && significance < 1.0 {
        Ok(())
    } else {
        Err(StatisticsError::InvalidSignificance(significance))
    }
}

/// Exact confidence interval for `successes` out of `trials` at `significance`.
///
/// # Errors
///
/// Fails on `trials == 0`, `successes > trials`, or significance outside `(0, 1)`.
pub fn clopper_pearson(
    successes: u64,
    trials: u64,
    significance: f64,
) -> Result<BinomialInterval, StatisticsError> {
    if trials == 0 || successes > trials {
        return Err(StatisticsError::InvalidTally { successes, trials });
    }
    check_significance(significance)?;

    let s = successes as f64;
    let m = trials as f64;
    let tail = 0.5 * significance;

    let lower = if successes == 0 {
        0.0
    } else {
        beta_quantile(s, m - s + 1.0, tail)?
    };
    let upper = if successes == trials {
        1.0
    } else {
        beta_quantile(s + 1.0, m - s, 1.0 - tail)?
    };

    Ok(BinomialInterval {
        lower,
        upper: upper.max(lower),
    })
}

/// Largest [`clopper_pearson`] half-width over every success count in `0..=trials`.
///
/// Bounds the statistical error of a batch of `trials` samples regardless of
/// the unknown true proportion.
pub fn worst_case_half_width(significance: f64, trials: u64) -> Result<f64, StatisticsError> {
    let mut worst = 0.0f64;
    for successes in 0..=trials {
        let ci = clopper_pearson(successes, trials, significance)?;
        worst = worst.max(ci.half_width());
    }
    Ok(worst)
}
