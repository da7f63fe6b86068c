//! Neighbor listing command
//!
//! Shows which dictionary words are one character away from a word.

use super::LadderError;
use crate::core::Word;
use crate::dictionary::{DictionaryIndex, NeighborStrategy};

/// Result of listing a word's neighbors
pub struct NeighborsResult {
    pub word: String,
    pub in_dictionary: bool,
    pub neighbors: Vec<String>,
    pub dictionary_size: usize,
    pub strategy: NeighborStrategy,
}

/// List the dictionary neighbors of a word
///
/// The word itself does not have to be in the dictionary.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid
/// - The dictionary has no words of the same length
pub fn list_neighbors<S: AsRef<str>>(
    word: &str,
    dictionary: &[S],
) -> Result<NeighborsResult, LadderError> {
    let word = Word::new(word)?;

    let index = DictionaryIndex::build(dictionary, word.len());
    if index.is_empty() {
        return Err(LadderError::EmptyDictionary(word.len()));
    }

    let neighbors = index
        .neighbors(&word)
        .into_iter()
        .map(|w| w.text().to_string())
        .collect();

    Ok(NeighborsResult {
        in_dictionary: index.contains(&word),
        word: word.text().to_string(),
        neighbors,
        dictionary_size: index.len(),
        strategy: index.strategy(),
    })
}
