//! Точность конечно-разностной производной в зависимости от шага
use clap::Parser;
use prettytable::{format, row, Table};
use roundoff_parallel::{
    cli::parse_or_exit,
    precision::derivative::{derivative_table, DEFAULT_POINT, DEFAULT_STEPS},
    utils::format_general,
};

const DIGITS: usize = 6;

#[derive(Debug, Parser)]
#[command(
    name = "numerical_derivative",
    version,
    about = "Forward-difference derivative of x(x-1) as the step shrinks"
)]
struct Args {
    /// Point at which the derivative is taken
    #[arg(long, default_value_t = DEFAULT_POINT, allow_negative_numbers = true)]
    x0: f64,

    /// Number of tenfold step reductions starting from h = 1
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: usize,
}

fn main() {
    let args: Args = parse_or_exit();

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row![r => "h", format!("df({})", format_general(args.x0, DIGITS)), "rel. error"]);

    for entry in derivative_table(args.x0, args.steps) {
        table.add_row(row![r =>
            format_general(entry.h, DIGITS),
            format_general(entry.derivative, DIGITS),
            format_general(entry.relative_error, DIGITS)
        ]);
    }

    table.printstd();
}
