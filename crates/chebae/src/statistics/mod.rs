//! Statistical methods for the estimator.
//!
//! - Exact (Clopper–Pearson) binomial confidence intervals from Beta quantiles
//! - Worst-case half-width of that interval over every outcome of a batch

mod binomial;

pub use binomial::{clopper_pearson, worst_case_half_width, BinomialInterval, StatisticsError};
