//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types: words and the ladders
//! built from them. Both are immutable once constructed.

mod ladder;
mod word;

pub use ladder::Ladder;
pub use word::{Word, WordError};
