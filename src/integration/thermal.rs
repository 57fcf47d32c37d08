//! Плотность идеального газа в тепловом равновесии
//!
//! n/T^3 = d / (2 pi^2) * integral x^2 / (exp(sqrt((m/T)^2 + x^2) - mu/T) + eta) dx
//! по x = p/T от 0 до бесконечности.

use super::gauss::{gauss_laguerre, gauss_legendre, integrate_quadrature, Quadrature};
use super::rectangle::{rectangle_rule, rectangle_rule_adaptive, AdaptiveEstimate};
use crate::error::{NumericsError, Result};
use serde::Serialize;
use std::f64::consts::PI;

/// Число узлов Гаусса-Лагерра по умолчанию
pub const DEFAULT_LAGUERRE_NODES: usize = 32;
/// Точность адаптивного правила прямоугольников по умолчанию
pub const DEFAULT_RECTANGLE_TOLERANCE: f64 = 1e-6;
const RECTANGLE_MAX_ITERATIONS: usize = 20;

// Разбиение отрезка для K_n: панели по BESSEL_NODES точек
const BESSEL_PANELS: usize = 8;
const BESSEL_NODES: usize = 32;
// exp(-x cosh t) на правом конце меньше exp(-x - BESSEL_CUTOFF)
const BESSEL_CUTOFF: f64 = 50.0;

/// Квантовая статистика частиц
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Statistics {
    /// Больцман (eta = 0)
    #[default]
    Boltzmann,
    /// Ферми-Дирак (eta = +1)
    FermiDirac,
    /// Бозе-Эйнштейн (eta = -1)
    BoseEinstein,
}

impl Statistics {
    pub fn eta(self) -> f64 {
        match self {
            Statistics::Boltzmann => 0.0,
            Statistics::FermiDirac => 1.0,
            Statistics::BoseEinstein => -1.0,
        }
    }
}

/// Параметры газа; температура, масса и химпотенциал в одних единицах (МэВ)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermalParams {
    pub temperature: f64,
    pub mu: f64,
    pub mass: f64,
    pub degeneracy: f64,
    pub statistics: Statistics,
}

impl Default for ThermalParams {
    fn default() -> Self {
        Self {
            temperature: 150.0,
            mu: 0.0,
            mass: 138.0,
            degeneracy: 1.0,
            statistics: Statistics::Boltzmann,
        }
    }
}

impl ThermalParams {
    fn validate(&self) -> Result<()> {
        if self.temperature.is_nan() || self.temperature <= 0.0 {
            return Err(NumericsError::invalid("temperature", "temperature must be positive"));
        }
        if self.statistics == Statistics::BoseEinstein && self.mu >= self.mass {
            return Err(NumericsError::invalid(
                "mu",
                "Bose-Einstein statistics requires the chemical potential below the mass",
            ));
        }
        Ok(())
    }

    /// Подынтегральное выражение по x = p/T
    pub fn density_integrand(&self, x: f64) -> f64 {
        let m = self.mass / self.temperature;
        let energy = (m * m + x * x).sqrt() - self.mu / self.temperature;
        self.degeneracy * x * x / (2.0 * PI * PI) / (energy.exp() + self.statistics.eta())
    }

    /// `density_integrand(x) * e^x` без переполнения: показатели
    /// складываются до взятия экспоненты
    fn laguerre_integrand(&self, x: f64) -> f64 {
        let m = self.mass / self.temperature;
        let energy = (m * m + x * x).sqrt() - self.mu / self.temperature;
        self.degeneracy * x * x / (2.0 * PI * PI) / ((energy - x).exp() + self.statistics.eta() * (-x).exp())
    }
}

// x = t / (1 - t), dx = dt / (1 - t)^2
fn compactified(params: &ThermalParams) -> impl Fn(f64) -> f64 + '_ {
    move |t: f64| {
        let s = 1.0 - t;
        params.density_integrand(t / s) / (s * s)
    }
}

/// n/T^3 адаптивным правилом прямоугольников.
///
/// Замена x = t / (1 - t) переводит [0, inf) в [0, 1).
pub fn density_rectangle(params: &ThermalParams, tol: f64) -> Result<AdaptiveEstimate> {
    params.validate()?;
    rectangle_rule_adaptive(compactified(params), 0.0, 1.0, 1, tol, RECTANGLE_MAX_ITERATIONS)
}

/// n/T^3 правилом прямоугольников с фиксированным числом отрезков
pub fn density_rectangle_fixed(params: &ThermalParams, subintervals: usize) -> Result<f64> {
    params.validate()?;
    rectangle_rule(compactified(params), 0.0, 1.0, subintervals)
}

/// n/T^3 квадратурой Гаусса-Лагерра; вес e^{-x} компенсируется множителем e^x.
///
/// Узлы с нулевым (исчезнувшим в машинной точности) весом пропускаются.
pub fn density_gauss_laguerre(params: &ThermalParams, nodes: usize) -> Result<f64> {
    params.validate()?;
    let quad = gauss_laguerre(nodes)?;
    Ok(quad
        .nodes
        .iter()
        .zip(&quad.weights)
        .filter(|&(_, &w)| w != 0.0)
        .map(|(&x, &w)| w * params.laguerre_integrand(x))
        .sum())
}

/// Модифицированная функция Бесселя второго рода K_nu(x), x > 0.
///
/// K_nu(x) = integral exp(-x cosh t) cosh(nu t) dt по [0, inf);
/// интеграл обрезается там, где экспонента пренебрежимо мала.
pub fn bessel_k(nu: f64, x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }

    let upper = (1.0 + BESSEL_CUTOFF / x).acosh();
    let Ok(base) = gauss_legendre(BESSEL_NODES) else {
        return f64::NAN;
    };
    let width = upper / BESSEL_PANELS as f64;

    (0..BESSEL_PANELS)
        .map(|panel| {
            let a = panel as f64 * width;
            let quad: Quadrature = base.scaled(a, a + width);
            integrate_quadrature(|t| (-x * t.cosh()).exp() * (nu * t).cosh(), &quad)
        })
        .sum()
}

/// Аналитический ответ в пределе Больцмана:
/// d m^2 / (2 pi^2 T^2) K_2(m/T) e^{mu/T}
pub fn density_analytic(params: &ThermalParams) -> f64 {
    let m = params.mass / params.temperature;
    params.degeneracy * m * m / (2.0 * PI * PI) * bessel_k(2.0, m) * (params.mu / params.temperature).exp()
}
