//! Ошибки округления и параллельные численные ядра
//!
//! Библиотека за набором независимых учебных программ из `src/bin`:
//! параллельное умножение матриц, суммирование массива, многомерное
//! интегрирование, демонстрации ошибок округления и одномерные
//! квадратуры.

pub mod cli;
pub mod error;
pub mod integration;
pub mod matrix;
pub mod parallel;
pub mod precision;
pub mod report;
pub mod utils;

// Реэкспорт основных типов для удобства
pub use error::{NumericsError, Result};
pub use matrix::MatrixType;
pub use parallel::WorkerPool;
