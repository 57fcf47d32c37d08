//! Одномерное правило прямоугольников и его адаптивный вариант

use crate::error::{NumericsError, Result};
use serde::Serialize;

/// Интеграл `f` по (a, b) по `n` отрезкам, значения в серединах отрезков
pub fn rectangle_rule<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(NumericsError::invalid("subintervals", "at least one subinterval is required"));
    }

    let h = (b - a) / n as f64;
    let sum: f64 = (0..n).map(|k| f(a + (k as f64 + 0.5) * h)).sum();
    Ok(sum * h)
}

/// Итог адаптивного интегрирования
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdaptiveEstimate {
    pub value: f64,
    /// Оценка ошибки (I_2n - I_n) / 3 на последней итерации
    pub error_estimate: f64,
    pub iterations: usize,
    pub subintervals: usize,
    pub converged: bool,
}

/// Удваивает число отрезков, пока оценка Рунге |I_2n - I_n| / 3 не станет
/// меньше `tol`, но не больше `max_iterations` вычислений правила.
pub fn rectangle_rule_adaptive<F>(
    f: F,
    a: f64,
    b: f64,
    n_start: usize,
    tol: f64,
    max_iterations: usize,
) -> Result<AdaptiveEstimate>
where
    F: Fn(f64) -> f64,
{
    let mut n = n_start;
    let mut previous = rectangle_rule(&f, a, b, n)?;
    let mut estimate = AdaptiveEstimate {
        value: previous,
        error_estimate: f64::INFINITY,
        iterations: 1,
        subintervals: n,
        converged: false,
    };

    for iteration in 2..=max_iterations {
        n = n
            .checked_mul(2)
            .ok_or_else(|| NumericsError::invalid("subintervals", "subinterval count overflowed"))?;
        let next = rectangle_rule(&f, a, b, n)?;
        let error = (next - previous) / 3.0;

        estimate = AdaptiveEstimate {
            value: next,
            error_estimate: error,
            iterations: iteration,
            subintervals: n,
            converged: error.abs() < tol,
        };
        if estimate.converged {
            break;
        }
        previous = next;
    }

    Ok(estimate)
}
