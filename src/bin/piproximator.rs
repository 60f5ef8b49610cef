//! Pi Approximator CLI
//!
//! Reads the leading digits of a numerator and denominator plus the target
//! precision, then prints the fraction the digit search settles on.

use clap::Parser;
use num_bigint::BigUint;
use pi_approximator::cli::{
    prompt_integer, ApproximationReport, DENOMINATOR_FIELD, NUMERATOR_FIELD, PRECISION_FIELD,
};
use pi_approximator::prelude::*;
use std::io::{self, BufRead, Write};
use std::process;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "piproximator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Approximate pi by a fraction built digit by digit", long_about = None)]
struct Cli {
    /// Most significant digits of the numerator (prompted when omitted)
    numerator: Option<BigUint>,

    /// Most significant digits of the denominator (prompted when omitted)
    denominator: Option<BigUint>,

    /// Number of digits the denominator must reach (prompted when omitted)
    precision: Option<usize>,

    /// Use the lookahead search with this many speculative digits
    #[arg(short, long)]
    depth: Option<usize>,

    /// Score lookahead candidate grids on all cores
    #[arg(long, requires = "depth")]
    parallel: bool,

    /// Abort after this many committed steps
    #[arg(long)]
    iteration_limit: Option<usize>,

    /// Also print the absolute error against pi
    #[arg(long)]
    show_error: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn value_or_prompt<T, R, W>(given: Option<T>, input: &mut R, output: &mut W, field: &str) -> io::Result<T>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    match given {
        Some(value) => Ok(value),
        None => prompt_integer(input, output, field),
    }
}

fn config_from(cli: &Cli) -> ApproximatorConfig {
    let search = match cli.depth {
        Some(depth) => SearchAlgorithmType::Lookahead {
            depth,
            use_parallel: cli.parallel,
        },
        None => SearchAlgorithmType::Greedy,
    };

    let config = ApproximatorConfig::new(search);
    match cli.iteration_limit {
        Some(limit) => config.with_iteration_limit(limit),
        None => config,
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let numerator = value_or_prompt(cli.numerator.clone(), &mut input, &mut output, NUMERATOR_FIELD)?;
    let denominator =
        value_or_prompt(cli.denominator.clone(), &mut input, &mut output, DENOMINATOR_FIELD)?;
    let precision = value_or_prompt(cli.precision, &mut input, &mut output, PRECISION_FIELD)?;

    let approximator = create_from_config(config_from(&cli), Arc::new(LoggingEventHandler))?;
    let fraction = approximator.approximate(numerator, denominator, precision)?;

    let report = ApproximationReport::new(&fraction, precision, approximator.algorithm_name())
        .with_error(cli.show_error);

    if cli.json {
        writeln!(output, "{}", report.to_json()?)?;
    } else {
        writeln!(output, "{}", report)?;
    }

    Ok(())
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
