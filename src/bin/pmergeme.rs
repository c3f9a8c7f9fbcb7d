//! Sorts the numbers given on the command line with merge-insertion, once per
//! main chain backing, and reports the result and the time each run took.
//!
//! Run (example):
//!   cargo run --release --bin pmergeme -- 3 5 9 7 4
//!   RUST_LOG=trace cargo run --bin pmergeme -- --backing vec --comparisons 9 1 8 2 7

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mergeinsertion::input::parse_elements;
use mergeinsertion::report::{timed_run, Report};
use mergeinsertion::{DequeChain, VecChain};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Backing {
    /// Contiguous buffer.
    Vec,
    /// Ring buffer.
    Deque,
    /// Both, one after the other.
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "pmergeme")]
#[command(about = "Sort non-negative integers with Ford-Johnson merge-insertion")]
struct Args {
    /// Numbers to sort, each between 0 and 2147483647.
    #[arg(required = true, allow_negative_numbers = true)]
    numbers: Vec<String>,

    /// Backing structure of the main chain.
    #[arg(long, value_enum, default_value_t = Backing::Both)]
    backing: Backing,

    /// Also print the number of comparisons per run.
    #[arg(long)]
    comparisons: bool,

    /// Only print the timing lines.
    #[arg(short, long)]
    quiet: bool,

    /// Log more (-v for debug, -vv for trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let input = parse_elements(&args.numbers).context("invalid input")?;

    let mut runs = Vec::with_capacity(2);
    if matches!(args.backing, Backing::Vec | Backing::Both) {
        runs.push(timed_run::<VecChain, _>(&input));
    }
    if matches!(args.backing, Backing::Deque | Backing::Both) {
        runs.push(timed_run::<DequeChain, _>(&input));
    }

    let report = Report::new(&input, runs)?
        .with_sequences(!args.quiet)
        .with_comparisons(args.comparisons);
    print!("{report}");

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
