//! Квадратуры Гаусса: узлы и веса
//!
//! Корни многочленов Лежандра и Лагерра ищутся методом Ньютона,
//! сами многочлены считаются по трехчленным рекуррентным формулам.

use crate::error::{NumericsError, Result};
use std::f64::consts::PI;

const NEWTON_TOLERANCE: f64 = 1e-15;
const LAGUERRE_TOLERANCE: f64 = 3e-14;
const MAX_NEWTON_ITERATIONS: usize = 100;

/// Узлы и веса квадратурной формулы
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrature {
    pub nodes: Vec<f64>,
    pub weights: Vec<f64>,
}

impl Quadrature {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Переносит формулу с [-1, 1] на [a, b]
    pub fn scaled(&self, a: f64, b: f64) -> Quadrature {
        let half = 0.5 * (b - a);
        let mid = 0.5 * (b + a);
        Quadrature {
            nodes: self.nodes.iter().map(|x| half * x + mid).collect(),
            weights: self.weights.iter().map(|w| half * w).collect(),
        }
    }
}

/// Сумма w_k f(x_k)
pub fn integrate_quadrature<F>(f: F, quad: &Quadrature) -> f64
where
    F: Fn(f64) -> f64,
{
    quad.nodes.iter().zip(&quad.weights).map(|(&x, &w)| w * f(x)).sum()
}

fn require_nodes(n: usize) -> Result<()> {
    if n == 0 {
        return Err(NumericsError::invalid("nodes", "a quadrature needs at least one node"));
    }
    Ok(())
}

// (P_n(x), P_{n-1}(x))
fn legendre_pair(n: usize, x: f64) -> (f64, f64) {
    let (mut p0, mut p1) = (1.0, x);
    for k in 1..n {
        let k = k as f64;
        let next = ((2.0 * k + 1.0) * x * p1 - k * p0) / (k + 1.0);
        p0 = p1;
        p1 = next;
    }
    (p1, p0)
}

fn legendre_derivative(n: usize, x: f64, pn: f64, pn_1: f64) -> f64 {
    n as f64 * (pn_1 - x * pn) / (1.0 - x * x)
}

/// n-точечная формула Гаусса-Лежандра на [-1, 1]
///
/// Начальное приближение к корням из Абрамовица-Стиган (22.16.6).
pub fn gauss_legendre(n: usize) -> Result<Quadrature> {
    require_nodes(n)?;
    let nf = n as f64;
    let mut nodes = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    for i in 0..n {
        let a = (3.0 + 4.0 * i as f64) / (4.0 * nf + 2.0);
        let mut x = (PI * a + 1.0 / (8.0 * nf * nf * a.tan())).cos();

        for _ in 0..MAX_NEWTON_ITERATIONS {
            let (pn, pn_1) = legendre_pair(n, x);
            let dx = pn / legendre_derivative(n, x, pn, pn_1);
            x -= dx;
            if dx.abs() < NEWTON_TOLERANCE {
                break;
            }
        }

        let (pn, pn_1) = legendre_pair(n, x);
        let dp = legendre_derivative(n, x, pn, pn_1);
        nodes.push(x);
        weights.push(2.0 / ((1.0 - x * x) * dp * dp));
    }

    Ok(Quadrature { nodes, weights })
}

/// n-точечная формула Гаусса-Лежандра на [a, b]
pub fn gauss_legendre_on(n: usize, a: f64, b: f64) -> Result<Quadrature> {
    Ok(gauss_legendre(n)?.scaled(a, b))
}

// (L_n(z), L_{n-1}(z), L_n'(z))
fn laguerre_triple(n: usize, z: f64) -> (f64, f64, f64) {
    let (mut p1, mut p2) = (1.0f64, 0.0f64);
    for j in 1..=n {
        let j = j as f64;
        let p3 = p2;
        p2 = p1;
        p1 = ((2.0 * j - 1.0 - z) * p2 - (j - 1.0) * p3) / j;
    }
    let nf = n as f64;
    (p1, p2, nf * (p1 - p2) / z)
}

/// n-точечная формула Гаусса-Лагерра для интеграла f(x) e^{-x} по [0, inf)
pub fn gauss_laguerre(n: usize) -> Result<Quadrature> {
    require_nodes(n)?;
    let nf = n as f64;
    let mut nodes: Vec<f64> = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);
    let mut z = 0.0f64;

    for i in 0..n {
        // Начальные приближения из Numerical Recipes (gaulag, alpha = 0)
        z = match i {
            0 => 3.0 / (1.0 + 2.4 * nf),
            1 => z + 15.0 / (1.0 + 2.5 * nf),
            _ => {
                let ai = (i - 1) as f64;
                z + (1.0 + 2.55 * ai) / (1.9 * ai) * (z - nodes[i - 2])
            }
        };

        for _ in 0..MAX_NEWTON_ITERATIONS {
            let (ln, _, dl) = laguerre_triple(n, z);
            let previous = z;
            z = previous - ln / dl;
            if (z - previous).abs() <= LAGUERRE_TOLERANCE * z.max(1.0) {
                break;
            }
        }

        let (_, ln_1, dl) = laguerre_triple(n, z);
        nodes.push(z);
        weights.push(-1.0 / (dl * nf * ln_1));
    }

    if nodes.iter().chain(&weights).any(|v| !v.is_finite()) {
        return Err(NumericsError::invalid(
            "nodes",
            format!("the {n}-point Gauss-Laguerre rule is not representable in f64"),
        ));
    }
    Ok(Quadrature { nodes, weights })
}
