//! Операции над матрицами

use super::types::{MatrixComparison, MatrixType};
use crate::error::{NumericsError, Result};
use crate::parallel::WorkerPool;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Инициализирует матрицы заданного типа и размера
pub fn initialize_matrices(matrix_type: MatrixType, size: usize) -> (Array2<i64>, Array2<i64>) {
    match matrix_type {
        MatrixType::Sample => {
            let a = Array2::from_shape_fn((size, size), |(i, j)| i as i64 + j as i64);
            let b = Array2::from_shape_fn((size, size), |(i, j)| i as i64 - j as i64);
            (a, b)
        }
        MatrixType::OnesAndTwos => (Array2::from_elem((size, size), 1), Array2::from_elem((size, size), 2)),
        MatrixType::Random { seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let a = Array2::from_shape_simple_fn((size, size), || rng.gen_range(-10..=10));
            let b = Array2::from_shape_simple_fn((size, size), || rng.gen_range(-10..=10));
            (a, b)
        }
    }
}

fn check_operands(a: &Array2<i64>, b: &Array2<i64>) -> Result<usize> {
    let (rows, inner) = a.dim();
    if rows != inner || a.dim() != b.dim() {
        return Err(NumericsError::DimensionMismatch { left: a.dim(), right: b.dim() });
    }
    Ok(rows)
}

/// Последовательная эталонная реализация
pub fn cpu_matrix_multiply(a: &Array2<i64>, b: &Array2<i64>) -> Result<Array2<i64>> {
    let size = check_operands(a, b)?;
    let mut c = Array2::zeros((size, size));
    for i in 0..size {
        for j in 0..size {
            let mut sum = 0i64;
            for k in 0..size {
                sum += a[[i, k]] * b[[k, j]];
            }
            c[[i, j]] = sum;
        }
    }
    Ok(c)
}

/// Параллельное умножение квадратных матриц.
///
/// Пары (i, j) разворачиваются в один индекс i * size + j и делятся между
/// потоками непрерывными кусками; каждый поток пишет только свои элементы C.
pub fn parallel_matrix_multiply(a: &Array2<i64>, b: &Array2<i64>, pool: &WorkerPool) -> Result<Array2<i64>> {
    let size = check_operands(a, b)?;
    let mut c = vec![0i64; size * size];

    pool.for_each_chunk_mut(&mut c, |offset, chunk| {
        for (local, slot) in chunk.iter_mut().enumerate() {
            let flat = offset + local;
            let (i, j) = (flat / size, flat % size);
            let mut sum = 0i64;
            for k in 0..size {
                sum += a[[i, k]] * b[[k, j]];
            }
            *slot = sum;
        }
    });

    Ok(Array2::from_shape_vec((size, size), c)?)
}

/// Сравнивает две матрицы поэлементно
pub fn compare_results(lhs: &Array2<i64>, rhs: &Array2<i64>) -> Result<MatrixComparison> {
    if lhs.dim() != rhs.dim() {
        return Err(NumericsError::DimensionMismatch { left: lhs.dim(), right: rhs.dim() });
    }

    let mut comparison = MatrixComparison { mismatches: 0, max_abs_diff: 0 };
    for (x, y) in lhs.iter().zip(rhs.iter()) {
        let diff = x.abs_diff(*y);
        if diff > 0 {
            comparison.mismatches += 1;
            comparison.max_abs_diff = comparison.max_abs_diff.max(diff);
        }
    }
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn sample_matrices_follow_index_formulas() {
        let (a, b) = initialize_matrices(MatrixType::Sample, 3);
        assert_eq!(a, array![[0, 1, 2], [1, 2, 3], [2, 3, 4]]);
        assert_eq!(b, array![[0, -1, -2], [1, 0, -1], [2, 1, 0]]);
    }

    #[test]
    fn two_by_two_golden_product() {
        let (a, b) = initialize_matrices(MatrixType::Sample, 2);
        let pool = WorkerPool::new(1).unwrap();
        let c = parallel_matrix_multiply(&a, &b, &pool).unwrap();
        assert_eq!(c, array![[1, 0], [2, -1]]);
    }

    #[test]
    fn parallel_matches_serial_reference() {
        let (a, b) = initialize_matrices(MatrixType::Random { seed: 7 }, 17);
        let pool = WorkerPool::new(4).unwrap();
        let parallel = parallel_matrix_multiply(&a, &b, &pool).unwrap();
        let serial = cpu_matrix_multiply(&a, &b).unwrap();
        assert!(compare_results(&parallel, &serial).unwrap().matches());
    }

    #[test]
    fn ones_and_twos_product_is_constant() {
        let (a, b) = initialize_matrices(MatrixType::OnesAndTwos, 5);
        let c = cpu_matrix_multiply(&a, &b).unwrap();
        assert!(c.iter().all(|&v| v == 10));
    }

    #[test]
    fn mismatched_operands_are_rejected() {
        let a = Array2::<i64>::zeros((2, 2));
        let b = Array2::<i64>::zeros((3, 3));
        let pool = WorkerPool::new(2).unwrap();
        assert!(matches!(
            parallel_matrix_multiply(&a, &b, &pool),
            Err(NumericsError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn comparison_reports_largest_difference() {
        let lhs = array![[1, 2], [3, 4]];
        let rhs = array![[1, -2], [3, 5]];
        let comparison = compare_results(&lhs, &rhs).unwrap();
        assert_eq!(comparison, MatrixComparison { mismatches: 2, max_abs_diff: 4 });
    }

    #[test]
    fn random_matrices_are_reproducible() {
        let first = initialize_matrices(MatrixType::Random { seed: 42 }, 4);
        let second = initialize_matrices(MatrixType::Random { seed: 42 }, 4);
        assert_eq!(first, second);
    }
}
