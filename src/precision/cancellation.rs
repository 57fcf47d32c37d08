//! Вычитание двух близких чисел
//!
//! (y - x) / delta при x = 1, y = 1 + delta * sqrt(2) должно давать sqrt(2),
//! но при малом delta разность y - x теряет почти все значащие цифры.

use serde::Serialize;
use std::f64::consts::SQRT_2;

/// Шаг по умолчанию
pub const DEFAULT_DELTA: f64 = 1e-14;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TwoNumbers {
    pub delta: f64,
    /// (y - x) / delta
    pub value: f64,
    /// value - sqrt(2)
    pub deviation: f64,
}

pub fn two_numbers(delta: f64) -> TwoNumbers {
    let x = 1.0f64;
    let y = 1.0 + delta * SQRT_2;
    let value = (1.0 / delta) * (y - x);
    TwoNumbers {
        delta,
        value,
        deviation: value - SQRT_2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_delta_loses_digits() {
        let result = two_numbers(DEFAULT_DELTA);
        assert_ne!(result.deviation, 0.0);
        assert!(result.deviation.abs() >= 1e-3 && result.deviation.abs() <= 1e-1, "{result:?}");
    }

    #[test]
    fn moderate_delta_is_accurate() {
        let result = two_numbers(1e-2);
        assert!(result.deviation.abs() < 1e-12, "{result:?}");
    }
}
