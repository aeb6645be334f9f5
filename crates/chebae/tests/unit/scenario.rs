//! End-to-end scenarios with the documented defaults.

use chebae::constants::{DEFAULT_GROWTH_RATIO, DEFAULT_NU, DEFAULT_SHOTS};
use chebae::{ChebyshevEstimator, Config, EstimationResult, SamplingMode, SimulatedOracle};

fn default_eighth() -> ChebyshevEstimator {
    let cfg = Config::new()
        .nu(DEFAULT_NU)
        .growth_ratio(DEFAULT_GROWTH_RATIO)
        .shots(DEFAULT_SHOTS);
    ChebyshevEstimator::new(0.125, 0.05, cfg).unwrap()
}

#[test]
fn eighth_accuracy_at_point_three() {
    let est = default_eighth();
    let seeds = 200u64;
    let mut total_queries = 0u64;
    for seed in 0..seeds {
        let result = est.simulate(0.3, seed).unwrap();
        assert_eq!(result.algorithm, "chebae");
        assert!(result.ci_width <= 0.125, "seed {seed}: {result}");
        assert_eq!(result.p_target, Some(0.3));
        let err = result.exact_error.unwrap();
        assert!((result.p_estimate - 0.3).abs() == err);
        assert!(result.num_queries > 0, "seed {seed}: {result}");
        total_queries += result.num_queries;
    }

    // Loose target: the run stays in the single-shot regime and averages a
    // few tens of query units. A single bulk batch alone costs 100.
    let mean = total_queries as f64 / seeds as f64;
    assert!(mean > 20.0 && mean < 100.0, "mean cost {mean:.1} query units");
}

#[test]
fn eighth_accuracy_samples_one_shot_at_a_time() {
    let est = default_eighth();
    let mut oracle = SimulatedOracle::with_seed(0.3, 99).unwrap();
    let (result, trace) = est.estimate_traced(&mut oracle).unwrap();
    // At the linear degree the projected error is the batch half-width
    // itself, far below ν·ε = 1.
    assert_eq!(trace[0].mode, SamplingMode::Late);
    assert_eq!(trace[0].shots, 1);
    let late = trace.iter().filter(|r| r.mode == SamplingMode::Late).count();
    assert!(late * 2 > trace.len(), "mostly single shots: {late}/{}", trace.len());
    assert_eq!(
        result.oracle_calls,
        trace.iter().map(|r| r.shots).sum::<u64>()
    );
}

#[test]
fn tight_target_starts_with_bulk_batches() {
    let est = ChebyshevEstimator::with_defaults(1e-3, 0.05).unwrap();
    let mut oracle = SimulatedOracle::with_seed(0.3, 5).unwrap();
    let (result, trace) = est.estimate_traced(&mut oracle).unwrap();
    assert_eq!(trace[0].mode, SamplingMode::Early);
    assert_eq!(trace[0].shots, 100);
    assert!(result.ci_width <= 1e-3);
    assert!(result.final_k > 0, "a tight target needs amplification");
}

#[test]
fn extreme_targets_converge() {
    let est = ChebyshevEstimator::with_defaults(0.01, 0.05).unwrap();
    for (i, p) in [0.0, 1e-6, 0.5, 1.0 - 1e-6, 1.0].into_iter().enumerate() {
        let result = est.simulate(p, i as u64).unwrap();
        assert!(result.ci_width <= 0.01, "p={p}: {result}");
        assert!(result.interval.lo >= 0.0 && result.interval.hi <= 1.0);
    }
}

#[test]
fn estimator_is_shareable_across_threads() {
    let est = ChebyshevEstimator::with_defaults(0.02, 0.05).unwrap();
    let results: Vec<EstimationResult> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let est = &est;
                scope.spawn(move || est.simulate(0.25 + 0.1 * seed as f64, seed).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for (seed, result) in results.iter().enumerate() {
        assert_eq!(*result, est.simulate(0.25 + 0.1 * seed as f64, seed as u64).unwrap());
    }
}

#[test]
fn result_serializes_to_json() {
    let result = default_eighth().simulate(0.3, 1).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"algorithm\":\"chebae\""));
    let back: EstimationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
