//! Модуль для работы с матрицами
//!
//! Предоставляет:
//! - Типы матриц
//! - Последовательное и параллельное умножение
//! - Сравнение результатов

mod types;
pub mod operations;

pub use types::{MatrixComparison, MatrixType};
pub use operations::{compare_results, cpu_matrix_multiply, initialize_matrices, parallel_matrix_multiply};
