//! Плотность идеального газа: правило прямоугольников, Гаусс-Лагерр и
//! аналитический ответ в пределе Больцмана
use anyhow::Result;
use clap::{Parser, ValueEnum};
use prettytable::{row, Table};
use roundoff_parallel::{
    cli::{parse_or_exit, positive_usize},
    integration::thermal::{DEFAULT_LAGUERRE_NODES, DEFAULT_RECTANGLE_TOLERANCE},
    integration::{
        density_analytic, density_gauss_laguerre, density_rectangle, density_rectangle_fixed, Statistics, ThermalParams,
    },
    utils::{format_general, measure_time},
};

const DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatisticsArg {
    Boltzmann,
    Fermi,
    Bose,
}

impl From<StatisticsArg> for Statistics {
    fn from(value: StatisticsArg) -> Self {
        match value {
            StatisticsArg::Boltzmann => Statistics::Boltzmann,
            StatisticsArg::Fermi => Statistics::FermiDirac,
            StatisticsArg::Bose => Statistics::BoseEinstein,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "thermal_density", version, about = "Number density n/T^3 of an ideal gas by numerical integration")]
struct Args {
    /// Temperature, MeV
    #[arg(long, default_value_t = 150.0)]
    temperature: f64,

    /// Chemical potential, MeV
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    mu: f64,

    /// Particle mass, MeV
    #[arg(long, default_value_t = 138.0)]
    mass: f64,

    /// Degeneracy factor
    #[arg(long, default_value_t = 1.0)]
    degeneracy: f64,

    #[arg(long, value_enum, default_value = "boltzmann")]
    statistics: StatisticsArg,

    /// Tolerance of the adaptive rectangle rule
    #[arg(long, default_value_t = DEFAULT_RECTANGLE_TOLERANCE)]
    eps: f64,

    /// Gauss-Laguerre node count
    #[arg(long, default_value_t = DEFAULT_LAGUERRE_NODES, value_parser = positive_usize)]
    nodes: usize,

    /// Also run the rectangle rule with this fixed number of subintervals
    #[arg(long, value_parser = positive_usize)]
    subintervals: Option<usize>,
}

fn main() -> Result<()> {
    let args: Args = parse_or_exit();
    let params = ThermalParams {
        temperature: args.temperature,
        mu: args.mu,
        mass: args.mass,
        degeneracy: args.degeneracy,
        statistics: args.statistics.into(),
    };

    println!(
        "T = {} MeV, mu = {} MeV, m = {} MeV, d = {}, {:?} statistics",
        params.temperature, params.mu, params.mass, params.degeneracy, params.statistics
    );

    let (rectangle, rectangle_time) = measure_time(|| density_rectangle(&params, args.eps));
    let rectangle = rectangle?;
    let (laguerre, laguerre_time) = measure_time(|| density_gauss_laguerre(&params, args.nodes));
    let laguerre = laguerre?;

    if !rectangle.converged {
        println!(
            "Failed to achieve the desired accuracy after {} iterations",
            rectangle.iterations
        );
    }

    let mut table = Table::new();
    table.add_row(row!["Method", "n/T^3", "Time, us"]);
    table.add_row(row![
        format!("Rectangle rule ({} subintervals)", rectangle.subintervals),
        format_general(rectangle.value, DIGITS),
        rectangle_time.as_micros()
    ]);
    table.add_row(row![
        format!("Gauss-Laguerre ({} nodes)", args.nodes),
        format_general(laguerre, DIGITS),
        laguerre_time.as_micros()
    ]);
    if let Some(subintervals) = args.subintervals {
        let (fixed, fixed_time) = measure_time(|| density_rectangle_fixed(&params, subintervals));
        table.add_row(row![
            format!("Rectangle rule, fixed ({} subintervals)", subintervals),
            format_general(fixed?, DIGITS),
            fixed_time.as_micros()
        ]);
    }
    if params.statistics == Statistics::Boltzmann {
        table.add_row(row!["Analytic (Bessel K2)", format_general(density_analytic(&params), DIGITS), "-"]);
    }
    table.printstd();

    Ok(())
}
