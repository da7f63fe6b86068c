//! Benchmark command
//!
//! Solves many random endpoint pairs from one dictionary in parallel.

use super::LadderError;
use crate::core::Word;
use crate::dictionary::DictionaryIndex;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random pairs to solve
    pub count: usize,
    /// Word length to draw pairs from (default: most common length)
    pub length: Option<usize>,
    /// Seed for pair sampling (default: random)
    pub seed: Option<u64>,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            length: None,
            seed: None,
            progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub word_length: usize,
    pub dictionary_size: usize,
    pub seed: u64,
    pub total_queries: usize,
    pub found: usize,
    pub not_found: usize,
    pub average_steps: f64,
    pub min_steps: usize,
    pub max_steps: usize,
    pub distribution: HashMap<usize, usize>,
    pub words_expanded: usize,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Per-query outcome
struct QueryOutcome {
    steps: Option<usize>,
    words_expanded: usize,
}

/// Run the benchmark over random pairs drawn from `dictionary`
///
/// The index is built once and shared read-only; every query owns its own
/// search state.
///
/// # Errors
///
/// Returns an error if the dictionary has fewer than two words of the
/// chosen length.
pub fn run_benchmark<S: AsRef<str>>(
    config: &BenchmarkConfig,
    dictionary: &[S],
) -> Result<BenchmarkResult, LadderError> {
    let word_length = config
        .length
        .or_else(|| most_common_length(dictionary))
        .unwrap_or(0);

    let index = DictionaryIndex::build(dictionary, word_length);
    if index.is_empty() {
        return Err(LadderError::EmptyDictionary(word_length));
    }
    if index.len() < 2 {
        return Err(LadderError::TooFewWords {
            length: word_length,
            needed: 2,
            found: index.len(),
        });
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs: Vec<(&Word, &Word)> = (0..config.count)
        .filter_map(|_| {
            let start = index.words().choose(&mut rng)?;
            let end = index.words().choose(&mut rng)?;
            Some((start, end))
        })
        .collect();

    tracing::info!(
        queries = pairs.len(),
        word_length,
        dictionary = index.len(),
        seed,
        "starting benchmark"
    );

    let pb = if config.progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let solver = Solver::new(&index);
    let started = Instant::now();

    let outcomes: Vec<QueryOutcome> = pairs
        .par_iter()
        .map(|&(start, end)| {
            let search = solver.search(start, end);
            pb.inc(1);
            QueryOutcome {
                steps: search.ladder.map(|ladder| ladder.steps()),
                words_expanded: search.stats.words_expanded,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = started.elapsed();

    Ok(summarize(
        &outcomes,
        word_length,
        index.len(),
        seed,
        duration,
    ))
}

/// Length shared by the most dictionary entries (ties: shorter wins)
fn most_common_length<S: AsRef<str>>(dictionary: &[S]) -> Option<usize> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for entry in dictionary {
        if let Ok(word) = Word::new(entry) {
            *counts.entry(word.len()).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .max_by(|(la, ca), (lb, cb)| ca.cmp(cb).then(lb.cmp(la)))
        .map(|(length, _)| length)
}

fn summarize(
    outcomes: &[QueryOutcome],
    word_length: usize,
    dictionary_size: usize,
    seed: u64,
    duration: Duration,
) -> BenchmarkResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let steps: Vec<usize> = outcomes.iter().filter_map(|o| o.steps).collect();
    for &s in &steps {
        *distribution.entry(s).or_insert(0) += 1;
    }

    let total_queries = outcomes.len();
    let found = steps.len();
    let average_steps = if found > 0 {
        steps.iter().sum::<usize>() as f64 / found as f64
    } else {
        0.0
    };
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        word_length,
        dictionary_size,
        seed,
        total_queries,
        found,
        not_found: total_queries - found,
        average_steps,
        min_steps: steps.iter().copied().min().unwrap_or(0),
        max_steps: steps.iter().copied().max().unwrap_or(0),
        distribution,
        words_expanded: outcomes.iter().map(|o| o.words_expanded).sum(),
        duration,
        queries_per_second: if seconds > 0.0 {
            total_queries as f64 / seconds
        } else {
            0.0
        },
    }
}
