//! Word lists for ladder searches
//!
//! Provides an embedded default dictionary compiled into the binary and a
//! loader for custom word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
