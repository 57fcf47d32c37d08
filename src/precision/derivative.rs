//! Конечно-разностная производная f(x) = x(x - 1)
//!
//! При уменьшении шага ошибка сначала падает (ошибка метода), затем
//! растет (ошибка округления).

use serde::Serialize;

/// Точка, в которой считается производная
pub const DEFAULT_POINT: f64 = 1.0;
/// Число уменьшений шага в 10 раз: h = 1 ... 1e-16
pub const DEFAULT_STEPS: usize = 16;

pub fn f(x: f64) -> f64 {
    x * (x - 1.0)
}

pub fn df_exact(x: f64) -> f64 {
    2.0 * x - 1.0
}

/// Правая разность (f(x + h) - f(x)) / h
pub fn df_numerical(x: f64, h: f64) -> f64 {
    (f(x + h) - f(x)) / h
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivativeRow {
    pub h: f64,
    pub derivative: f64,
    pub relative_error: f64,
}

/// Таблица для h = 1, 0.1, ..., 10^-steps
pub fn derivative_table(x0: f64, steps: usize) -> Vec<DerivativeRow> {
    let exact = df_exact(x0);
    let mut h = 1.0f64;
    let mut rows = Vec::with_capacity(steps + 1);
    for _ in 0..=steps {
        let derivative = df_numerical(x0, h);
        rows.push(DerivativeRow {
            h,
            derivative,
            relative_error: (derivative - exact).abs() / exact,
        });
        h /= 10.0;
    }
    rows
}
