//! Ladder solving command
//!
//! Validates a start/end pair against a dictionary and returns the ladder
//! together with search diagnostics.

use super::LadderError;
use crate::core::{Ladder, Word};
use crate::dictionary::{DictionaryIndex, NeighborStrategy};
use crate::solver::{SearchStats, Solver};
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub start: String,
    pub end: String,
}

impl SolveConfig {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub ladder: Ladder,
    pub stats: SearchStats,
    pub dictionary_size: usize,
    pub strategy: NeighborStrategy,
    pub duration: Duration,
}

/// Solve one ladder, explaining any failure
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid or they differ in length
/// - The dictionary has no words of that length
/// - Either word is missing from the dictionary
/// - No chain connects the words
pub fn solve_ladder<S: AsRef<str>>(
    config: &SolveConfig,
    dictionary: &[S],
) -> Result<SolveResult, LadderError> {
    let started = Instant::now();

    let start = Word::new(&config.start)?;
    let end = Word::new(&config.end)?;

    if start.len() != end.len() {
        return Err(LadderError::LengthMismatch {
            start: start.text().to_string(),
            end: end.text().to_string(),
            start_len: start.len(),
            end_len: end.len(),
        });
    }

    let index = DictionaryIndex::build(dictionary, start.len());
    if index.is_empty() {
        return Err(LadderError::EmptyDictionary(start.len()));
    }

    for word in [&start, &end] {
        if !index.contains(word) {
            return Err(LadderError::NotInDictionary(word.text().to_string()));
        }
    }

    let search = Solver::new(&index).search(&start, &end);
    let ladder = search.ladder.ok_or_else(|| LadderError::NoLadder {
        start: start.text().to_string(),
        end: end.text().to_string(),
    })?;

    Ok(SolveResult {
        ladder,
        stats: search.stats,
        dictionary_size: index.len(),
        strategy: index.strategy(),
        duration: started.elapsed(),
    })
}
