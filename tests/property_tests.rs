//! Property-based tests using proptest.
//!
//! These tests check that the parallel kernels do not depend on how the
//! iteration space is split between workers.

use proptest::prelude::*;
use roundoff_parallel::matrix::{cpu_matrix_multiply, initialize_matrices, parallel_matrix_multiply, MatrixType};
use roundoff_parallel::parallel::{
    analytic_sin_of_sum, partition, rectangle_rule_multi, repeated_sum, sin_of_sum, QuadratureConfig, SumConfig,
};
use roundoff_parallel::WorkerPool;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn partition_is_contiguous_and_balanced(len in 0usize..10_000, parts in 1usize..64) {
        let ranges = partition(len, parts);
        let mut expected_start = 0;
        for range in &ranges {
            prop_assert_eq!(range.start, expected_start);
            prop_assert!(!range.is_empty());
            expected_start = range.end;
        }
        prop_assert_eq!(expected_start, len);
        prop_assert!(ranges.len() <= parts);

        if let (Some(max), Some(min)) = (ranges.iter().map(|r| r.len()).max(), ranges.iter().map(|r| r.len()).min()) {
            prop_assert!(max - min <= 1);
        }
    }

    #[test]
    fn matrix_product_does_not_depend_on_worker_count(
        size in 1usize..24,
        workers in 2usize..6,
        seed in any::<u64>(),
    ) {
        let (a, b) = initialize_matrices(MatrixType::Random { seed }, size);
        let single = parallel_matrix_multiply(&a, &b, &WorkerPool::new(1).unwrap()).unwrap();
        let many = parallel_matrix_multiply(&a, &b, &WorkerPool::new(workers).unwrap()).unwrap();
        prop_assert_eq!(&single, &many);
        prop_assert_eq!(single, cpu_matrix_multiply(&a, &b).unwrap());
    }

    #[test]
    fn sample_matrix_product_is_exact_for_any_worker_count(size in 1usize..32, workers in 1usize..8) {
        let (a, b) = initialize_matrices(MatrixType::Sample, size);
        let single = parallel_matrix_multiply(&a, &b, &WorkerPool::new(1).unwrap()).unwrap();
        let many = parallel_matrix_multiply(&a, &b, &WorkerPool::new(workers).unwrap()).unwrap();
        prop_assert_eq!(single, many);
    }

    #[test]
    fn repeated_sum_is_exact(
        length in 0usize..5_000,
        value in -1_000i64..1_000,
        repetitions in 0usize..6,
        workers in 1usize..6,
    ) {
        let config = SumConfig { length, value };
        let pool = WorkerPool::new(workers).unwrap();
        let total = repeated_sum(&config, repetitions, &pool, |_| {}).unwrap();
        prop_assert_eq!(total, repetitions as i64 * length as i64 * value);
    }
}

#[test]
fn quadrature_error_shrinks_as_points_grow() {
    let config = QuadratureConfig::default();
    let exact = analytic_sin_of_sum(&config);
    let pool = WorkerPool::new(4).unwrap();

    let errors: Vec<f64> = [4, 8, 16, 32, 64]
        .iter()
        .map(|&n| (rectangle_rule_multi(&config, n, &pool, sin_of_sum).unwrap() - exact).abs())
        .collect();

    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "errors not decreasing: {errors:?}");
    }
    // Правило средних точек второго порядка: удвоение N уменьшает ошибку ~в 4 раза
    let ratio = errors[3] / errors[4];
    assert!((ratio - 4.0).abs() < 0.2, "ratio {ratio}");
}

#[test]
fn quadrature_is_reproducible_for_fixed_worker_count() {
    let config = QuadratureConfig::default();
    let pool = WorkerPool::new(3).unwrap();
    let first = rectangle_rule_multi(&config, 30, &pool, sin_of_sum).unwrap();
    let second = rectangle_rule_multi(&config, 30, &pool, sin_of_sum).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    let serial = rectangle_rule_multi(&config, 30, &WorkerPool::new(1).unwrap(), sin_of_sum).unwrap();
    assert!((serial - first).abs() < 1e-12);
}
