//! Word Ladder - CLI
//!
//! Finds the shortest chain of one-letter substitutions between two words
//! using bidirectional breadth-first search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, list_neighbors, run_benchmark, run_simple, solve_ladder,
    },
    output::{print_benchmark_result, print_neighbors_result, print_solve_result},
    wordlists::{
        WORDS,
        loader::{lines_from_slice, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladder search using bidirectional breadth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(
        short,
        long,
        global = true,
        env = "WORD_LADDER_DICTIONARY",
        default_value = "embedded"
    )]
    dictionary: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest ladder between two words
    Solve {
        /// First word of the ladder
        start: String,

        /// Last word of the ladder
        end: String,

        /// Show search statistics
        #[arg(short, long)]
        stats: bool,
    },

    /// List the dictionary words one substitution away from a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Benchmark the solver on random word pairs
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Word length to sample (default: most common length in the dictionary)
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed for reproducible pair selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Interactive prompt reading word pairs from stdin (default)
    Simple,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(source: &str) -> Result<Vec<String>> {
    match source {
        "embedded" => Ok(lines_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to read dictionary '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.dictionary)?;
    tracing::info!(
        source = %cli.dictionary,
        entries = dictionary.len(),
        "dictionary loaded"
    );

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Solve { start, end, stats } => {
            let config = SolveConfig::new(start, end);
            let result = solve_ladder(&config, &dictionary)?;
            print_solve_result(&result, stats);
        }
        Commands::Neighbors { word } => {
            let result = list_neighbors(&word, &dictionary)?;
            print_neighbors_result(&result);
        }
        Commands::Benchmark {
            count,
            length,
            seed,
        } => {
            let mut config = BenchmarkConfig::new(count);
            config.length = length;
            config.seed = seed;

            println!("Running benchmark on {count} random word pairs...");
            let result = run_benchmark(&config, &dictionary)?;
            print_benchmark_result(&result);
        }
        Commands::Simple => {
            run_simple(&dictionary, io::stdin().lock())?;
        }
    }

    Ok(())
}
