//! Integration tests for full integrator runs
//! Exercises partition, dispatch, join, and reduction together

use piquad_core::{Integrator, Interval, PiquadError, partial_integral};
use proptest::prelude::*;

#[test]
fn test_four_workers_land_near_pi() {
    let result = Integrator::new(10_000_000, 4).unwrap().run().unwrap();
    assert!((result.value - std::f64::consts::PI).abs() < 1e-5);
}

#[test]
fn test_worker_count_changes_value_only_slightly() {
    // Different partitions reorder the summation, so the values may differ
    // in the low bits, but never by more than discretization noise
    let reference = Integrator::new(1_000_000, 1).unwrap().run().unwrap().value;
    for workers in [2, 3, 5, 8] {
        let value = Integrator::new(1_000_000, workers).unwrap().run().unwrap().value;
        assert!((value - reference).abs() < 1e-4);
    }
}

#[test]
fn test_validation_happens_before_dispatch() {
    assert!(matches!(
        Integrator::new(0, 4),
        Err(PiquadError::InvalidIntervals)
    ));
    assert!(matches!(
        Integrator::new(1_000, -1),
        Err(PiquadError::InvalidWorkers { requested: -1 })
    ));
}

proptest! {
    #[test]
    fn prop_result_is_finite_and_positive(
        intervals in 1u64..100_000,
        workers in 1i64..=8,
    ) {
        let result = Integrator::new(intervals, workers).unwrap().run().unwrap();
        prop_assert!(result.value.is_finite());
        prop_assert!(result.value > 0.0);
    }

    #[test]
    fn prop_dense_grids_approximate_pi(
        intervals in 50_000u64..200_000,
        workers in 1i64..=8,
    ) {
        let result = Integrator::new(intervals, workers).unwrap().run().unwrap();
        prop_assert!((result.value - std::f64::consts::PI).abs() < 1e-2);
    }

    #[test]
    fn prop_single_worker_equals_sequential_pass(intervals in 1u64..50_000) {
        let step = 1.0 / intervals as f64;
        let sequential = partial_integral(Interval::new(0.0, 1.0), step);
        let result = Integrator::new(intervals, 1).unwrap().run().unwrap();
        prop_assert_eq!(result.value.to_bits(), sequential.to_bits());
    }
}
