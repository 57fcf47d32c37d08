//! Проверка на точное равенство после округления: 1.1 + 2.2 == 3.3

use serde::Serialize;

/// Допуск сравнения по умолчанию
pub const DEFAULT_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EqualityTest {
    pub x: f64,
    pub epsilon: f64,
    pub exact_equal: bool,
    pub tolerant_equal: bool,
}

pub fn equality_test(epsilon: f64) -> EqualityTest {
    let x = 1.1 + 2.2;
    EqualityTest {
        x,
        epsilon,
        exact_equal: x == 3.3,
        tolerant_equal: (x - 3.3).abs() < epsilon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_comparison_fails_tolerant_succeeds() {
        let result = equality_test(DEFAULT_EPSILON);
        assert!(!result.exact_equal);
        assert!(result.tolerant_equal);
    }

    #[test]
    fn zero_tolerance_rejects_the_sum() {
        assert!(!equality_test(0.0).tolerant_equal);
    }
}
