//! Сравнение x = 1.1 + 2.2 с 3.3 точно и с допуском
use clap::Parser;
use roundoff_parallel::{
    cli::parse_or_exit,
    precision::{equality::DEFAULT_EPSILON, equality_test},
    utils::format_general,
};

#[derive(Debug, Parser)]
#[command(name = "equality_test", version, about = "Why 1.1 + 2.2 == 3.3 is false in floating point")]
struct Args {
    /// Tolerance of the approximate comparison
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    eps: f64,
}

fn verdict(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn main() {
    let args: Args = parse_or_exit();
    let result = equality_test(args.eps);

    println!("x = {}", format_general(result.x, 18));
    println!("x == 3.3 is {}", verdict(result.exact_equal));
    println!(
        "x == 3.3 to a precision of {} is {}",
        format_general(result.epsilon, 18),
        verdict(result.tolerant_equal)
    );
}
