//! Многомерное правило прямоугольников (средних точек)

use super::pool::WorkerPool;
use crate::error::{NumericsError, Result};
use std::f64::consts::FRAC_PI_2;

/// Границы интегрирования и размерность
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureConfig {
    pub lower: f64,
    pub upper: f64,
    pub dimensions: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: FRAC_PI_2,
            dimensions: 3,
        }
    }
}

/// sin(x1 + x2 + ... + xd)
pub fn sin_of_sum(x: &[f64]) -> f64 {
    x.iter().sum::<f64>().sin()
}

/// Интеграл от `f` по кубу [lower, upper]^d, `points` отрезков на ось.
///
/// Пространство из N^d точек разворачивается в один индекс и делится
/// между потоками статически; каждый поток суммирует свои точки локально.
pub fn rectangle_rule_multi<F>(config: &QuadratureConfig, points: usize, pool: &WorkerPool, f: F) -> Result<f64>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    if points == 0 {
        return Err(NumericsError::invalid("points", "at least one integration point per axis is required"));
    }
    if !config.lower.is_finite() || !config.upper.is_finite() {
        return Err(NumericsError::invalid(
            "bounds",
            format!("integration bounds must be finite, got [{}, {}]", config.lower, config.upper),
        ));
    }
    if config.dimensions == 0 {
        return Err(NumericsError::invalid("dimensions", "the integration domain needs at least one dimension"));
    }
    let dims = u32::try_from(config.dimensions)
        .map_err(|_| NumericsError::invalid("dimensions", "too many dimensions"))?;
    let total = points.checked_pow(dims).ok_or_else(|| {
        NumericsError::invalid(
            "points",
            format!("{points}^{} integration nodes do not fit into the index space", config.dimensions),
        )
    })?;

    let h = (config.upper - config.lower) / points as f64;
    let lower = config.lower;
    let dimensions = config.dimensions;

    let sum = pool.map_reduce(
        total,
        0.0f64,
        |range| {
            let mut x = vec![0.0f64; dimensions];
            let mut local = 0.0;
            for flat in range {
                // Последняя координата меняется быстрее всех, как во вложенных циклах
                let mut rest = flat;
                for coordinate in x.iter_mut().rev() {
                    let index = rest % points;
                    rest /= points;
                    *coordinate = lower + index as f64 * h + h / 2.0;
                }
                local += f(&x);
            }
            local
        },
        |a, b| a + b,
    );

    Ok(h.powi(dims as i32) * sum)
}

/// Точное значение интеграла sin(x1 + ... + xd) по кубу.
///
/// Im(((e^{ib} - e^{ia}) / i)^d), т.к. подынтегральное выражение есть
/// мнимая часть произведения экспонент.
pub fn analytic_sin_of_sum(config: &QuadratureConfig) -> f64 {
    // (e^{ib} - e^{ia}) / i = (sin b - sin a) - i (cos b - cos a)
    let re = config.upper.sin() - config.lower.sin();
    let im = -(config.upper.cos() - config.lower.cos());

    let (mut acc_re, mut acc_im) = (1.0f64, 0.0f64);
    for _ in 0..config.dimensions {
        let next_re = acc_re * re - acc_im * im;
        let next_im = acc_re * im + acc_im * re;
        acc_re = next_re;
        acc_im = next_im;
    }
    acc_im
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytic_value_of_default_cube_is_two() {
        let exact = analytic_sin_of_sum(&QuadratureConfig::default());
        assert!((exact - 2.0).abs() < 1e-14, "got {exact}");
    }

    #[test]
    fn one_dimensional_analytic_value() {
        let config = QuadratureConfig { dimensions: 1, ..Default::default() };
        // интеграл sin x по [0, pi/2] равен 1
        assert!((analytic_sin_of_sum(&config) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn midpoint_rule_approaches_exact_value() {
        let pool = WorkerPool::new(2).unwrap();
        let config = QuadratureConfig::default();
        let value = rectangle_rule_multi(&config, 40, &pool, sin_of_sum).unwrap();
        assert!((value - 2.0).abs() < 1e-3, "got {value}");
    }

    #[test]
    fn zero_points_are_rejected() {
        let pool = WorkerPool::new(1).unwrap();
        let result = rectangle_rule_multi(&QuadratureConfig::default(), 0, &pool, sin_of_sum);
        assert!(matches!(result, Err(NumericsError::InvalidArgument { name: "points", .. })));
    }

    #[test]
    fn infinite_bounds_are_rejected() {
        let pool = WorkerPool::new(1).unwrap();
        for config in [
            QuadratureConfig { upper: f64::INFINITY, ..Default::default() },
            QuadratureConfig { lower: f64::NEG_INFINITY, ..Default::default() },
            QuadratureConfig { upper: f64::NAN, ..Default::default() },
        ] {
            let result = rectangle_rule_multi(&config, 10, &pool, sin_of_sum);
            assert!(matches!(result, Err(NumericsError::InvalidArgument { name: "bounds", .. })));
        }
    }

    #[test]
    fn oversized_index_space_is_rejected() {
        let pool = WorkerPool::new(1).unwrap();
        let config = QuadratureConfig { dimensions: 8, ..Default::default() };
        assert!(rectangle_rule_multi(&config, 1 << 12, &pool, sin_of_sum).is_err());
    }

    #[test]
    fn node_placement_matches_nested_loops() {
        // f = x1 на [0, 1]^2, N = 2: сумма по узлам 0.25 и 0.75, по два раза
        let pool = WorkerPool::new(3).unwrap();
        let config = QuadratureConfig { lower: 0.0, upper: 1.0, dimensions: 2 };
        let value = rectangle_rule_multi(&config, 2, &pool, |x| x[0]).unwrap();
        assert!((value - 0.5).abs() < 1e-15);
    }
}
