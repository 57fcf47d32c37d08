//! Обзор: по одному небольшому запуску каждой демонстрации библиотеки

use anyhow::Result;
use roundoff_parallel::{
    integration::{density_analytic, density_gauss_laguerre, ThermalParams},
    matrix::{compare_results, cpu_matrix_multiply, initialize_matrices, parallel_matrix_multiply, MatrixType},
    parallel::{analytic_sin_of_sum, rectangle_rule_multi, repeated_sum, sin_of_sum, QuadratureConfig, SumConfig},
    precision::{derivative::DEFAULT_STEPS, derivative_table, equality_test, quadratic_roots, two_numbers},
    utils::{format_general, format_scientific, measure_time},
    WorkerPool,
};

const TOUR_THREADS: usize = 4;
const TOUR_MATRIX_SIZE: usize = 128;
const TOUR_POINTS: usize = 64;

fn main() -> Result<()> {
    println!("Floating-point round-off");
    println!("------------------------");

    let equality = equality_test(1e-12);
    println!(
        "1.1 + 2.2 = {}; exact == 3.3: {}, within 1e-12: {}",
        format_general(equality.x, 18),
        equality.exact_equal,
        equality.tolerant_equal
    );

    let cancellation = two_numbers(1e-14);
    println!(
        "(y - x)/delta = {} deviates from sqrt(2) by {}",
        format_general(cancellation.value, 17),
        format_general(cancellation.deviation, 6)
    );

    let rows = derivative_table(1.0, DEFAULT_STEPS);
    if let Some(best) = rows.iter().min_by(|a, b| a.relative_error.total_cmp(&b.relative_error)) {
        println!(
            "Best forward-difference step h = {} (relative error {})",
            format_general(best.h, 6),
            format_general(best.relative_error, 6)
        );
    }

    let roots = quadratic_roots(1.0, 1e8, 1.0)?;
    println!(
        "x^2 + 1e8 x + 1 = 0: small root {} (direct) vs {} (stable)",
        format_scientific(roots.direct.x1, 6),
        format_scientific(roots.alternative.x1, 6)
    );

    println!();
    println!("Parallel kernels ({} threads)", TOUR_THREADS);
    println!("----------------------------");
    let pool = WorkerPool::new(TOUR_THREADS)?;

    let (a, b) = initialize_matrices(MatrixType::Sample, TOUR_MATRIX_SIZE);
    let (c, elapsed) = measure_time(|| parallel_matrix_multiply(&a, &b, &pool));
    let c = c?;
    let reference = cpu_matrix_multiply(&a, &b)?;
    println!(
        "{n}x{n} matrix product in {} ms, matches serial: {}",
        elapsed.as_millis(),
        compare_results(&c, &reference)?.matches(),
        n = TOUR_MATRIX_SIZE
    );

    let config = SumConfig { length: 1_000_000, ..SumConfig::default() };
    let (total, elapsed) = measure_time(|| repeated_sum(&config, 10, &pool, |_| {}));
    println!("Sum of 10 x {} fives = {} in {} ms", config.length, total?, elapsed.as_millis());

    let cube = QuadratureConfig::default();
    let (integral, elapsed) = measure_time(|| rectangle_rule_multi(&cube, TOUR_POINTS, &pool, sin_of_sum));
    let integral = integral?;
    println!(
        "Midpoint rule, {} points per axis: {} (exact {}) in {} ms",
        TOUR_POINTS,
        format_general(integral, 16),
        format_general(analytic_sin_of_sum(&cube), 16),
        elapsed.as_millis()
    );

    println!();
    let params = ThermalParams::default();
    println!(
        "Pion gas at T = {} MeV: n/T^3 = {} (Gauss-Laguerre), {} (analytic)",
        params.temperature,
        format_general(density_gauss_laguerre(&params, 32)?, 12),
        format_general(density_analytic(&params), 12)
    );

    Ok(())
}
