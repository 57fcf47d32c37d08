//! Многомерное правило прямоугольников для sin(x1 + x2 + x3)
use anyhow::Result;
use clap::Parser;
use roundoff_parallel::{
    cli::{parse_or_exit, positive_usize, validate_threads},
    parallel::{analytic_sin_of_sum, rectangle_rule_multi, sin_of_sum, QuadratureConfig},
    report::KernelReport,
    utils::{format_general, measure_time},
    WorkerPool,
};
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Parser)]
#[command(
    name = "rectangle_rule_multi",
    version,
    about = "Integrate sin(x1 + ... + xd) over a cube with the parallel midpoint rule"
)]
struct Args {
    /// Subintervals per axis
    #[arg(value_name = "integration_points", value_parser = positive_usize)]
    integration_points: usize,

    /// Number of worker threads
    #[arg(value_name = "num_threads", value_parser = positive_usize)]
    num_threads: usize,

    /// Dimensionality of the integration domain
    #[arg(long, default_value_t = 3, value_parser = positive_usize)]
    dimensions: usize,

    /// Lower bound on every axis
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lower: f64,

    /// Upper bound on every axis
    #[arg(long, default_value_t = FRAC_PI_2, allow_negative_numbers = true)]
    upper: f64,

    /// Also print the exact value and the error
    #[arg(long)]
    exact: bool,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct IntegralSummary {
    points: usize,
    dimensions: usize,
    integral: f64,
    exact: f64,
}

fn main() -> Result<()> {
    let args: Args = parse_or_exit();
    let threads = validate_threads(args.num_threads)?;
    let config = QuadratureConfig {
        lower: args.lower,
        upper: args.upper,
        dimensions: args.dimensions,
    };
    let pool = WorkerPool::new(threads)?;

    let (result, elapsed) = measure_time(|| rectangle_rule_multi(&config, args.integration_points, &pool, sin_of_sum));
    let integral = result?;
    let exact = analytic_sin_of_sum(&config);

    if args.json {
        let summary = IntegralSummary {
            points: args.integration_points,
            dimensions: config.dimensions,
            integral,
            exact,
        };
        println!("{}", KernelReport::new("rectangle_rule_multi", pool.workers(), elapsed, summary).to_json()?);
        return Ok(());
    }

    println!("Integral: {}", format_general(integral, 16));
    if args.exact {
        println!("Exact: {}", format_general(exact, 16));
        println!("Error: {}", format_general(integral - exact, 6));
    }
    println!("Numerical integration took  {} milliseconds.", elapsed.as_millis());

    Ok(())
}
