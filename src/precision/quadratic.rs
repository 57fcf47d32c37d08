//! Корни квадратного уравнения ax^2 + bx + c = 0
//!
//! Прямая формула (-b +- sqrt(b^2 - 4ac)) / 2a при |ac| << b^2 вычитает
//! два почти равных больших числа. Альтернатива 2c / (-b -+ sqrt(b^2 - 4ac))
//! этого вычитания не содержит.

use crate::error::{NumericsError, Result};
use serde::Serialize;

fn sqrt_discriminant(a: f64, b: f64, c: f64) -> f64 {
    (b * b - 4.0 * a * c).sqrt()
}

pub fn x1_direct(a: f64, b: f64, c: f64) -> f64 {
    (-b + sqrt_discriminant(a, b, c)) / (2.0 * a)
}

pub fn x2_direct(a: f64, b: f64, c: f64) -> f64 {
    (-b - sqrt_discriminant(a, b, c)) / (2.0 * a)
}

pub fn x1_alternative(a: f64, b: f64, c: f64) -> f64 {
    2.0 * c / (-b - sqrt_discriminant(a, b, c))
}

pub fn x2_alternative(a: f64, b: f64, c: f64) -> f64 {
    2.0 * c / (-b + sqrt_discriminant(a, b, c))
}

/// Пара корней
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RootPair {
    pub x1: f64,
    pub x2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadraticRoots {
    pub direct: RootPair,
    pub alternative: RootPair,
}

/// Оба варианта формул; ошибка, если вещественных корней нет
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Result<QuadraticRoots> {
    if b * b < 4.0 * a * c {
        return Err(NumericsError::NoRealRoots { a, b, c });
    }

    Ok(QuadraticRoots {
        direct: RootPair {
            x1: x1_direct(a, b, c),
            x2: x2_direct(a, b, c),
        },
        alternative: RootPair {
            x1: x1_alternative(a, b, c),
            x2: x2_alternative(a, b, c),
        },
    })
}
