//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! constant. Entries are kept raw; normalization happens when a
//! [`DictionaryIndex`](crate::DictionaryIndex) is built.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw dictionary entries from a newline-separated file
///
/// Blank lines are dropped. Other lines are returned untouched, including
/// any trailing `\r` left by CRLF files.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(lines_from_str(&content))
}

/// Split text into raw dictionary entries, dropping blank lines
#[must_use]
pub fn lines_from_str(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert the embedded string slice to owned entries
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::lines_from_slice;
/// use word_ladder::wordlists::WORDS;
///
/// let entries = lines_from_slice(WORDS);
/// assert_eq!(entries.len(), WORDS.len());
/// ```
#[must_use]
pub fn lines_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
