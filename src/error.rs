//! Ошибки библиотеки

use thiserror::Error;

/// Ошибки численных ядер и демонстраций
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericsError {
    /// Недопустимое значение параметра (размер, число потоков, число узлов)
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Размеры операндов не согласованы
    #[error("dimension mismatch: left is {left:?}, right is {right:?}")]
    DimensionMismatch { left: (usize, usize), right: (usize, usize) },

    /// Дискриминант отрицателен
    #[error("the quadratic equation {a}x^2 + {b}x + {c} = 0 has no real roots")]
    NoRealRoots { a: f64, b: f64, c: f64 },

    /// Ошибка построения массива ndarray
    #[error("array shape error: {0}")]
    Shape(String),
}

impl NumericsError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument { name, reason: reason.into() }
    }
}

impl From<ndarray::ShapeError> for NumericsError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Shape(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NumericsError>;
