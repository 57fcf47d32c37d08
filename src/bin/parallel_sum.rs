//! Многократное параллельное суммирование массива
use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use roundoff_parallel::{
    cli::{parse_or_exit, positive_usize, validate_threads},
    parallel::{repeated_sum, SumConfig},
    parallel::sum::{DEFAULT_ARRAY_LENGTH, DEFAULT_ELEMENT_VALUE},
    report::KernelReport,
    utils::measure_time,
    WorkerPool,
};

#[derive(Debug, Parser)]
#[command(name = "parallel_sum", version, about = "Sum a large array repeatedly with a parallel reduction")]
struct Args {
    /// How many times the array is summed
    #[arg(value_name = "repetitions_size", value_parser = positive_usize)]
    repetitions_size: usize,

    /// Number of worker threads
    #[arg(value_name = "num_threads", value_parser = positive_usize)]
    num_threads: usize,

    /// Number of array elements
    #[arg(long, default_value_t = DEFAULT_ARRAY_LENGTH)]
    length: usize,

    /// Value of every element
    #[arg(long, default_value_t = DEFAULT_ELEMENT_VALUE, allow_negative_numbers = true)]
    value: i64,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args: Args = parse_or_exit();
    let threads = validate_threads(args.num_threads)?;
    let config = SumConfig {
        length: args.length,
        value: args.value,
    };
    let pool = WorkerPool::new(threads)?;

    // Прогресс рисуется в stderr, в stdout только результат
    let pb = ProgressBar::new(args.repetitions_size as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} sums")?
            .progress_chars("#>-"),
    );

    let (total, elapsed) = measure_time(|| {
        repeated_sum(&config, args.repetitions_size, &pool, |done| pb.set_position(done as u64))
    });
    pb.finish_and_clear();
    let total = total?;

    if args.json {
        println!("{}", KernelReport::new("parallel_sum", pool.workers(), elapsed, total).to_json()?);
        return Ok(());
    }

    println!("Sum of the array {} times: {}", args.repetitions_size, total);
    println!("Summation took {} milliseconds.", elapsed.as_millis());

    Ok(())
}
