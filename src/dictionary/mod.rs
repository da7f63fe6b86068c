//! Dictionary index for ladder searches
//!
//! Normalizes a raw word list to a single word length and answers membership
//! and neighbor queries. An index is immutable once built, so it can be
//! shared read-only between independent searches.

mod neighbors;

pub use neighbors::NeighborStrategy;

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Queryable set of same-length words
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    length: usize,
    words: Vec<Word>,
    lookup: FxHashMap<String, usize>,
    alphabet: Vec<char>,
    strategy: NeighborStrategy,
}

impl DictionaryIndex {
    /// Build an index of all entries of `length` characters
    ///
    /// Each entry is trimmed and lower-cased first. Entries that are not
    /// valid words or have a different length are skipped, and duplicates
    /// collapse into one member.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::{DictionaryIndex, Word};
    ///
    /// let index = DictionaryIndex::build(["Cat\r", "cot", "cats", "", "COT"], 3);
    /// assert_eq!(index.len(), 2);
    /// assert!(index.contains(&Word::new("CAT").unwrap()));
    /// assert!(!index.contains(&Word::new("cats").unwrap()));
    /// ```
    pub fn build<I, S>(entries: I, length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        let mut unique: BTreeSet<Word> = BTreeSet::new();

        for entry in entries {
            seen += 1;
            match Word::new(entry) {
                Ok(word) if word.len() == length => {
                    unique.insert(word);
                }
                _ => {}
            }
        }

        let words: Vec<Word> = unique.into_iter().collect();
        let alphabet: Vec<char> = words
            .iter()
            .flat_map(|w| w.chars().iter().copied())
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect();
        let strategy = NeighborStrategy::select(alphabet.len(), words.len());

        tracing::debug!(
            length,
            entries = seen,
            indexed = words.len(),
            alphabet = alphabet.len(),
            strategy = strategy.name(),
            "built dictionary index"
        );

        Self::assemble(length, words, alphabet, strategy)
    }

    /// Rebuild with a forced neighbor strategy
    #[cfg(test)]
    pub(crate) fn with_strategy(&self, strategy: NeighborStrategy) -> Self {
        Self::assemble(
            self.length,
            self.words.clone(),
            self.alphabet.clone(),
            strategy,
        )
    }

    fn assemble(
        length: usize,
        words: Vec<Word>,
        alphabet: Vec<char>,
        strategy: NeighborStrategy,
    ) -> Self {
        let lookup = words
            .iter()
            .enumerate()
            .map(|(id, word)| (word.text().to_string(), id))
            .collect();

        Self {
            length,
            words,
            lookup,
            alphabet,
            strategy,
        }
    }

    /// Word length this index was built for
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    /// Number of indexed words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no entry matched the requested length
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Indexed words in lexicographic order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Distinct symbols occurring in the indexed words, sorted
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Neighbor strategy chosen for this dictionary
    #[must_use]
    pub const fn strategy(&self) -> NeighborStrategy {
        self.strategy
    }

    /// Check whether `word` is a member of the index
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains_key(word.text())
    }

    /// The index's own copy of `word`, if it is a member
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&Word> {
        self.lookup.get(word.text()).map(|&id| &self.words[id])
    }

    /// All indexed words differing from `word` in exactly one position
    ///
    /// The result is sorted lexicographically and never contains `word`.
    /// Words of another length have no neighbors.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::{DictionaryIndex, Word};
    ///
    /// let index = DictionaryIndex::build(["cat", "dat", "cet", "pop"], 3);
    /// let cat = Word::new("cat").unwrap();
    /// let neighbors: Vec<&str> = index.neighbors(&cat).iter().map(|w| w.text()).collect();
    /// assert_eq!(neighbors, ["cet", "dat"]);
    /// ```
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<&Word> {
        if word.len() != self.length {
            return Vec::new();
        }

        match self.strategy {
            NeighborStrategy::AlphabetWalk => {
                neighbors::alphabet_walk(word, &self.alphabet, &self.words, &self.lookup)
            }
            NeighborStrategy::DictionaryScan => neighbors::dictionary_scan(word, &self.words),
        }
    }
}
