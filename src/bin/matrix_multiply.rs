//! Параллельное умножение целочисленных матриц
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use roundoff_parallel::{
    cli::{parse_or_exit, positive_usize, validate_threads},
    matrix::{compare_results, cpu_matrix_multiply, initialize_matrices, parallel_matrix_multiply, MatrixType},
    report::KernelReport,
    utils::measure_time,
    WorkerPool,
};
use serde::Serialize;

const DEFAULT_SEED: u64 = 42;
// Матрицы больше этого печатаются только углом
const PRINT_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Init {
    /// A[i][j] = i + j, B[i][j] = i - j
    Sample,
    /// A = 1, B = 2
    Ones,
    /// Seeded random integers in -10..=10
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "matrix_multiply", version, about = "Multiply two square integer matrices in parallel")]
struct Args {
    /// Matrix dimension N (N x N operands)
    #[arg(value_name = "matrix_size", value_parser = positive_usize)]
    matrix_size: usize,

    /// Number of worker threads
    #[arg(value_name = "num_threads", value_parser = positive_usize)]
    num_threads: usize,

    /// How to fill the operands
    #[arg(long, value_enum, default_value = "sample")]
    init: Init,

    /// Seed for `--init random`
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Print the result matrix
    #[arg(long)]
    print: bool,

    /// Also run the serial reference and compare
    #[arg(long)]
    verify: bool,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct MatrixSummary {
    size: usize,
    center: i64,
    matches_reference: Option<bool>,
}

fn main() -> Result<()> {
    let args: Args = parse_or_exit();
    let threads = validate_threads(args.num_threads)?;
    let size = args.matrix_size;

    let matrix_type = match args.init {
        Init::Sample => MatrixType::Sample,
        Init::Ones => MatrixType::OnesAndTwos,
        Init::Random => MatrixType::Random { seed: args.seed },
    };

    let (a, b) = initialize_matrices(matrix_type, size);
    let pool = WorkerPool::new(threads)?;

    let (c, elapsed) = measure_time(|| parallel_matrix_multiply(&a, &b, &pool));
    let c = c.context("parallel multiplication failed")?;

    let matches_reference = if args.verify {
        let reference = cpu_matrix_multiply(&a, &b)?;
        Some(compare_results(&c, &reference)?.matches())
    } else {
        None
    };

    if args.json {
        let summary = MatrixSummary {
            size,
            center: c[[size / 2, size / 2]],
            matches_reference,
        };
        println!("{}", KernelReport::new("matrix_multiply", pool.workers(), elapsed, summary).to_json()?);
        return Ok(());
    }

    if args.print {
        let shown = size.min(PRINT_LIMIT);
        println!("Result matrix C ({}x{}):", size, size);
        for i in 0..shown {
            let row: Vec<String> = (0..shown).map(|j| c[[i, j]].to_string()).collect();
            let ellipsis = if shown < size { " ..." } else { "" };
            println!("{}{}", row.join(" "), ellipsis);
        }
        if shown < size {
            println!("...");
        }
    }

    if let Some(matches) = matches_reference {
        println!("Parallel and serial results {}", if matches { "match" } else { "differ" });
    }

    println!("Matrix multiplication took {} milliseconds.", elapsed.as_millis());

    Ok(())
}
