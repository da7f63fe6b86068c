//! Neighbor generation strategies
//!
//! Both strategies return the dictionary members that differ from a word in
//! exactly one position, sorted lexicographically, and never the word itself.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// How the index enumerates neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborStrategy {
    /// Substitute every alphabet symbol at every position and probe the index.
    /// Costs `length × alphabet` lookups per call.
    AlphabetWalk,
    /// Compare the word against every dictionary member.
    /// Costs `dictionary × length` character comparisons per call.
    DictionaryScan,
}

impl NeighborStrategy {
    /// Pick the cheaper strategy for a dictionary shape
    ///
    /// Both strategies touch every position, so the choice reduces to
    /// alphabet size versus dictionary size.
    #[must_use]
    pub const fn select(alphabet_size: usize, dictionary_size: usize) -> Self {
        if alphabet_size < dictionary_size {
            Self::AlphabetWalk
        } else {
            Self::DictionaryScan
        }
    }

    /// Short label used in logs and output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AlphabetWalk => "alphabet-walk",
            Self::DictionaryScan => "dictionary-scan",
        }
    }
}

/// Alphabet walk over the lookup table
pub(super) fn alphabet_walk<'a>(
    word: &Word,
    alphabet: &[char],
    words: &'a [Word],
    lookup: &FxHashMap<String, usize>,
) -> Vec<&'a Word> {
    let mut neighbors = Vec::new();

    for position in 0..word.len() {
        let original = word.char_at(position);

        for &symbol in alphabet {
            if symbol == original {
                continue;
            }

            let candidate = word.substituted(position, symbol);
            if let Some(&id) = lookup.get(&candidate) {
                neighbors.push(&words[id]);
            }
        }
    }

    neighbors.sort_unstable();
    neighbors
}

/// Linear scan of the (sorted) dictionary
pub(super) fn dictionary_scan<'a>(word: &Word, words: &'a [Word]) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|candidate| word.is_neighbor(candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        let mut words: Vec<Word> = texts.iter().map(|t| Word::new(t).unwrap()).collect();
        words.sort();
        words
    }

    fn lookup(words: &[Word]) -> FxHashMap<String, usize> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.text().to_string(), i))
            .collect()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|&w| w.text()).collect()
    }

    #[test]
    fn select_prefers_alphabet_walk_for_large_dictionaries() {
        assert_eq!(
            NeighborStrategy::select(26, 10_000),
            NeighborStrategy::AlphabetWalk
        );
    }

    #[test]
    fn select_prefers_scan_for_small_dictionaries() {
        assert_eq!(
            NeighborStrategy::select(26, 4),
            NeighborStrategy::DictionaryScan
        );
        assert_eq!(
            NeighborStrategy::select(4, 4),
            NeighborStrategy::DictionaryScan
        );
    }

    #[test]
    fn alphabet_walk_no_neighbors() {
        let dictionary = words(&["cat", "dap", "cep", "pop"]);
        let alphabet = ['a', 'b', 'c', 'd', 'e', 't', 'p', 'o'];
        let cat = Word::new("cat").unwrap();

        let found = alphabet_walk(&cat, &alphabet, &dictionary, &lookup(&dictionary));
        assert!(found.is_empty());
    }

    #[test]
    fn alphabet_walk_finds_neighbors() {
        let dictionary = words(&["cat", "dat", "cet", "pop"]);
        let alphabet = ['a', 'b', 'c', 'd', 'e', 't', 'p', 'o'];
        let cat = Word::new("cat").unwrap();

        let found = alphabet_walk(&cat, &alphabet, &dictionary, &lookup(&dictionary));
        assert_eq!(texts(&found), ["cet", "dat"]);
    }

    #[test]
    fn dictionary_scan_no_neighbors() {
        let dictionary = words(&["cat", "dap", "cep", "pop"]);
        let cat = Word::new("cat").unwrap();

        assert!(dictionary_scan(&cat, &dictionary).is_empty());
    }

    #[test]
    fn dictionary_scan_finds_neighbors() {
        let dictionary = words(&["cat", "dat", "cet", "pop"]);
        let cat = Word::new("cat").unwrap();

        let found = dictionary_scan(&cat, &dictionary);
        assert_eq!(texts(&found), ["cet", "dat"]);
    }

    #[test]
    fn strategies_agree() {
        let dictionary = words(&[
            "cold", "cord", "card", "ward", "warm", "word", "worm", "wore", "core", "cole",
        ]);
        let table = lookup(&dictionary);
        let alphabet: Vec<char> = ('a'..='z').collect();

        for word in &dictionary {
            assert_eq!(
                alphabet_walk(word, &alphabet, &dictionary, &table),
                dictionary_scan(word, &dictionary),
                "strategies disagree for {word}"
            );
        }
    }
}
