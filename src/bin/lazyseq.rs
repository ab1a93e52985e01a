// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line demo of the lazy sequence primitives.
//!
//! Build with `--features cli`. Run with `RUST_LOG=lazy_seq=trace` (or
//! `--trace`) to watch individual pulls.

use clap::{Parser, Subcommand};
use lazy_seq::{filter, fibs, from_iter, nats, qsort, repeat, take, zip, Seq, SeqResult};
use std::fmt::Debug;

#[derive(Parser)]
#[command(name = "lazyseq")]
#[command(about = "Print prefixes of lazily evaluated sequences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every memo pull and replay
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// The natural numbers
    Nats {
        /// How many values to print
        #[arg(short, long, default_value = "10")]
        count: usize,
    },

    /// The memoized Fibonacci stream
    Fibs {
        /// How many values to print
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// Replay the stream this many extra times from the same memo
        #[arg(long, default_value = "0")]
        replays: usize,
    },

    /// Even natural numbers
    Evens {
        /// How many values to print
        #[arg(short, long, default_value = "10")]
        count: usize,
    },

    /// Pairs of the natural numbers with a constant
    Zip {
        /// How many values to print
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// The constant paired with each natural number
        #[arg(long, default_value = "1")]
        with: i64,
    },

    /// Lazily sort the given values
    Qsort {
        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Print only the smallest values
        #[arg(short, long)]
        count: Option<usize>,
    },
}

fn main() -> SeqResult<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.trace {
        logger.filter_module("lazy_seq", log::LevelFilter::Trace);
    }
    logger.init();

    match cli.command {
        Commands::Nats { count } => print(take(count, nats()))?,

        Commands::Fibs { count, replays } => {
            let stream = fibs();
            for _ in 0..=replays {
                print(take(count, stream.cursor()))?;
            }
            log::info!("[lazyseq] {} Fibonacci values cached", stream.cached_len());
        }

        Commands::Evens { count } => print(take(count, filter(|x| x % 2 == 0, nats())))?,

        Commands::Zip { count, with } => print(take(count, zip(nats(), repeat(with))))?,

        Commands::Qsort { values, count } => {
            let n = count.unwrap_or(values.len()).min(values.len());
            print(take(n, qsort(from_iter(values))))?;
        }
    }

    Ok(())
}

fn print<T: Debug>(seq: Seq<'_, T>) -> SeqResult<()> {
    println!("{:?}", seq.to_vec()?);
    Ok(())
}
