//! Loop invariants checked over many seeded runs.

use chebae::{chebyshev_degree, select_degree, ChebyshevEstimator, DegreeChoice, SimulatedOracle};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

#[test]
fn interval_width_is_non_increasing() {
    let est = ChebyshevEstimator::with_defaults(0.01, 0.05).unwrap();
    let mut targets = Xoshiro256PlusPlus::seed_from_u64(2024);
    for seed in 0..20 {
        let p: f64 = targets.random();
        let mut oracle = SimulatedOracle::with_seed(p, seed).unwrap();
        let (_, trace) = est.estimate_traced(&mut oracle).unwrap();
        let mut prev = 1.0;
        for record in &trace {
            let width = record.interval.width();
            assert!(width <= prev, "p={p} seed={seed}: width grew {prev} -> {width}");
            assert!(0.0 <= record.interval.lo && record.interval.hi <= 1.0);
            prev = width;
        }
    }
}

#[test]
fn degree_only_grows_and_respects_ratio() {
    let est = ChebyshevEstimator::with_defaults(1e-3, 0.05).unwrap();
    let ratio = est.config().growth_ratio;
    for seed in 0..10 {
        let mut oracle = SimulatedOracle::with_seed(0.05 + 0.09 * seed as f64, seed).unwrap();
        let (result, trace) = est.estimate_traced(&mut oracle).unwrap();
        for pair in trace.windows(2) {
            let (a, b) = (pair[0].k, pair[1].k);
            assert!(b >= a);
            if b > a {
                assert!(b as f64 > ratio * a as f64);
            }
        }
        assert!(result.rounds <= est.plan().max_rounds);
    }
}

#[test]
fn every_degree_used_is_monotone_on_its_interval() {
    let est = ChebyshevEstimator::with_defaults(1e-3, 0.05).unwrap();
    let mut oracle = SimulatedOracle::with_seed(0.83, 17).unwrap();
    let (_, trace) = est.estimate_traced(&mut oracle).unwrap();
    // The interval a degree was adopted on is the one before the first
    // iteration at that degree.
    let mut before = chebae::ProbabilityInterval::UNIT;
    let mut last_k = 0;
    for record in &trace {
        if record.k != last_k {
            let choice = select_degree(&before, 0.0);
            let best = choice.k().expect("an adopted degree implies an improvement exists");
            assert!(record.k <= best);
            assert!(chebae_core::degree::is_monotone_on(chebyshev_degree(record.k), &before));
            last_k = record.k;
        }
        before = record.interval;
    }
}

#[test]
fn full_interval_uses_linear_degree() {
    assert_eq!(
        select_degree(&chebae::ProbabilityInterval::UNIT, 0.0),
        DegreeChoice::NoImprovement
    );
    let est = ChebyshevEstimator::with_defaults(0.05, 0.05).unwrap();
    let mut oracle = SimulatedOracle::with_seed(0.5, 1).unwrap();
    let (_, trace) = est.estimate_traced(&mut oracle).unwrap();
    assert_eq!(trace[0].k, 0);
    assert_eq!(trace[0].round, 1);
}

#[test]
fn queries_sum_degrees_over_samples() {
    let est = ChebyshevEstimator::with_defaults(0.01, 0.05).unwrap();
    let mut oracle = SimulatedOracle::with_seed(0.4, 8).unwrap();
    let (result, trace) = est.estimate_traced(&mut oracle).unwrap();
    let expected: u64 = trace.iter().map(|r| r.shots * chebyshev_degree(r.k)).sum();
    assert_eq!(result.num_queries, expected);
}
