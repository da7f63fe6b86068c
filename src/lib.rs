//! Word Ladder
//!
//! Finds the shortest chain of single-character edits between two words,
//! where every intermediate word comes from a dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::solve;
//!
//! let dictionary = ["cold", "cord", "card", "ward", "warm"];
//! let ladder = solve("cold", "warm", &dictionary).unwrap();
//! println!("{ladder} ({} steps)", ladder.steps());
//! ```

// Core domain types
pub mod core;

// Dictionary indexing and neighbor generation
pub mod dictionary;

// Ladder search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use crate::core::{Ladder, Word, WordError};
pub use dictionary::DictionaryIndex;
pub use solver::{Search, SearchStats, Solver, solve};
