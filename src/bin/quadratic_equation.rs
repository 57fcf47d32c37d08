//! Корни квадратного уравнения: прямая формула против устойчивой
use anyhow::{bail, Context, Result};
use clap::Parser;
use roundoff_parallel::{
    cli::parse_or_exit,
    precision::quadratic_roots,
    utils::format_scientific,
    NumericsError,
};
use std::io::{self, BufRead, Write};

const PRECISION: usize = 6;

#[derive(Debug, Parser)]
#[command(
    name = "quadratic_equation",
    version,
    about = "Roots of ax^2 + bx + c = 0; prompts for the coefficients when they are not given"
)]
struct Args {
    #[arg(value_name = "a", allow_negative_numbers = true, requires = "b")]
    a: Option<f64>,

    #[arg(value_name = "b", allow_negative_numbers = true, requires = "c")]
    b: Option<f64>,

    #[arg(value_name = "c", allow_negative_numbers = true)]
    c: Option<f64>,
}

fn prompt(input: &mut impl BufRead, name: &str) -> Result<f64> {
    print!("Enter {}: ", name);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("failed to read coefficient {}", name))?;
    if read == 0 {
        bail!("input ended before coefficient {} was entered", name);
    }
    line.trim()
        .parse()
        .with_context(|| format!("`{}` is not a valid value for {}", line.trim(), name))
}

fn main() -> Result<()> {
    let args: Args = parse_or_exit();

    let (a, b, c) = match (args.a, args.b, args.c) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let a = prompt(&mut input, "a")?;
            let b = prompt(&mut input, "b")?;
            let c = prompt(&mut input, "c")?;
            (a, b, c)
        }
    };

    // Сначала проверяем, что корни вещественные
    let roots = match quadratic_roots(a, b, c) {
        Ok(roots) => roots,
        Err(NumericsError::NoRealRoots { .. }) => {
            println!("The quadratic equation has no real roots!");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    println!();
    println!("Using formula x_{{1,2}} = (-b +- \\sqrt{{b^2-4ac}}/(2a))");
    println!("x1 = {}", format_scientific(roots.direct.x1, PRECISION));
    println!("x2 = {}", format_scientific(roots.direct.x2, PRECISION));
    println!();
    println!("Using formula x_{{1,2}} = 2c/(-b -+ \\sqrt{{b^2-4ac}})");
    println!("x1 = {}", format_scientific(roots.alternative.x1, PRECISION));
    println!("x2 = {}", format_scientific(roots.alternative.x2, PRECISION));

    Ok(())
}
