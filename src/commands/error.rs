//! Errors reported by the command layer
//!
//! The solver itself only answers "ladder" or "no ladder". Commands inspect
//! their inputs to explain *why* no ladder was produced.

use crate::core::WordError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("'{start}' and '{end}' must have the same length ({start_len} vs {end_len})")]
    LengthMismatch {
        start: String,
        end: String,
        start_len: usize,
        end_len: usize,
    },

    #[error("Dictionary has no {0}-letter words")]
    EmptyDictionary(usize),

    #[error("Need at least {needed} {length}-letter words, dictionary has {found}")]
    TooFewWords {
        length: usize,
        needed: usize,
        found: usize,
    },

    #[error("Word '{0}' is not in the dictionary")]
    NotInDictionary(String),

    #[error("No ladder exists from '{start}' to '{end}'")]
    NoLadder { start: String, end: String },
}
