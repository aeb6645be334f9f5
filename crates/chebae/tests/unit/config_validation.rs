//! Tests for input validation.
//!
//! Every invalid input must be rejected when the estimator is built, before
//! any oracle query, and be distinguishable from internal failures.

use chebae::{ChebyshevEstimator, Config, EstimationError, SimulatedOracle};

fn assert_invalid_config(result: Result<ChebyshevEstimator, EstimationError>, needle: &str) {
    match result {
        Err(EstimationError::InvalidConfig { message }) => {
            assert!(message.contains(needle), "message {message:?} should mention {needle:?}")
        }
        other => panic!("expected InvalidConfig mentioning {needle:?}, got {other:?}"),
    }
}

// =============================================================================
// EPSILON
// =============================================================================

#[test]
fn epsilon_zero_rejected() {
    assert_invalid_config(ChebyshevEstimator::with_defaults(0.0, 0.05), "epsilon");
}

#[test]
fn epsilon_negative_rejected() {
    assert_invalid_config(ChebyshevEstimator::with_defaults(-0.01, 0.05), "epsilon");
}

#[test]
fn epsilon_infinite_rejected() {
    assert_invalid_config(ChebyshevEstimator::with_defaults(f64::INFINITY, 0.05), "epsilon");
}

#[test]
fn epsilon_tiny_valid() {
    let est = ChebyshevEstimator::with_defaults(1e-6, 0.05).unwrap();
    assert_eq!(est.plan().rounds, 19);
}

// =============================================================================
// ALPHA
// =============================================================================

#[test]
fn alpha_bounds_rejected() {
    assert_invalid_config(ChebyshevEstimator::with_defaults(0.1, 0.0), "alpha");
    assert_invalid_config(ChebyshevEstimator::with_defaults(0.1, 1.0), "alpha");
    assert_invalid_config(ChebyshevEstimator::with_defaults(0.1, -0.5), "alpha");
}

#[test]
fn alpha_interior_valid() {
    for alpha in [0.001, 0.05, 0.5, 0.999] {
        let est = ChebyshevEstimator::with_defaults(0.1, alpha).unwrap();
        assert_eq!(est.plan().alpha, alpha);
    }
}

// =============================================================================
// SAMPLING POLICY
// =============================================================================

#[test]
fn shots_zero_rejected() {
    assert_invalid_config(
        ChebyshevEstimator::new(0.1, 0.05, Config::new().shots(0)),
        "shots",
    );
}

#[test]
fn growth_ratio_at_most_one_rejected() {
    assert_invalid_config(
        ChebyshevEstimator::new(0.1, 0.05, Config::new().growth_ratio(1.0)),
        "growth_ratio",
    );
    assert_invalid_config(
        ChebyshevEstimator::new(0.1, 0.05, Config::new().growth_ratio(0.5)),
        "growth_ratio",
    );
}

#[test]
fn nu_non_positive_rejected() {
    assert_invalid_config(ChebyshevEstimator::new(0.1, 0.05, Config::new().nu(0.0)), "nu");
    assert_invalid_config(ChebyshevEstimator::new(0.1, 0.05, Config::new().nu(-1.0)), "nu");
}

#[test]
fn custom_policy_valid() {
    let cfg = Config::new().nu(4.0).growth_ratio(1.5).shots(20);
    let est = ChebyshevEstimator::new(0.05, 0.1, cfg).unwrap();
    assert_eq!(*est.config(), cfg);
}

// =============================================================================
// SIMULATED TARGET
// =============================================================================

#[test]
fn target_out_of_range_rejected() {
    let est = ChebyshevEstimator::with_defaults(0.1, 0.05).unwrap();
    assert_eq!(est.simulate(1.2, 0).unwrap_err(), EstimationError::InvalidTarget(1.2));
    assert!(SimulatedOracle::with_seed(-0.2, 0).unwrap_err().is_config_error());
}
