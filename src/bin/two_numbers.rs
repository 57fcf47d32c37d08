//! (y - x) / delta для x = 1, y = 1 + delta * sqrt(2)
use clap::Parser;
use roundoff_parallel::{
    cli::parse_or_exit,
    precision::{cancellation::DEFAULT_DELTA, two_numbers},
    utils::format_general,
};
use std::f64::consts::SQRT_2;

const DIGITS: usize = 17;

#[derive(Debug, Parser)]
#[command(name = "two_numbers", version, about = "Cancellation when subtracting two nearly equal numbers")]
struct Args {
    /// Scale of the difference between the two numbers
    #[arg(long, default_value_t = DEFAULT_DELTA)]
    delta: f64,
}

fn main() {
    let args: Args = parse_or_exit();
    let result = two_numbers(args.delta);

    println!(
        "{} * (y-x) = {}",
        format_general(result.delta, DIGITS),
        format_general(result.value, DIGITS)
    );
    println!("The accurate value is sqrt(2) = {}", format_general(SQRT_2, DIGITS));
    println!("The difference is {}", format_general(result.deviation, DIGITS));
}
