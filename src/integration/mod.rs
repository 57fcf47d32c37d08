//! Одномерное численное интегрирование
//!
//! Правило прямоугольников (обычное и адаптивное), квадратуры
//! Гаусса-Лежандра и Гаусса-Лагерра, и их применение к плотности
//! идеального газа.

pub mod gauss;
pub mod rectangle;
pub mod thermal;

pub use gauss::{gauss_laguerre, gauss_legendre, gauss_legendre_on, integrate_quadrature, Quadrature};
pub use rectangle::{rectangle_rule, rectangle_rule_adaptive, AdaptiveEstimate};
pub use thermal::{
    bessel_k, density_analytic, density_gauss_laguerre, density_rectangle, density_rectangle_fixed, Statistics,
    ThermalParams,
};
