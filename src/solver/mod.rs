//! Word ladder solving
//!
//! The production search is a bidirectional BFS that always grows the
//! smaller frontier and stops at the first word both directions have seen.

mod engine;
mod frontier;
mod reconstruct;
#[cfg(test)]
pub(crate) mod reference;

pub use engine::{Search, SearchStats, Solver};
pub use frontier::Direction;

use crate::core::{Ladder, Word};
use crate::dictionary::DictionaryIndex;

/// Find a shortest ladder between two words over a raw word list
///
/// Builds a fresh [`DictionaryIndex`] for the start word's length and runs
/// one search. Returns `None` when the words have different lengths, either
/// word is missing from the dictionary, or no chain exists. Identical words
/// give a one-word ladder without searching.
///
/// # Examples
/// ```
/// use word_ladder::solve;
///
/// let ladder = solve("cat", "dog", &["cat", "cot", "cog", "dog"]).unwrap();
/// assert_eq!(ladder.texts(), ["cat", "cot", "cog", "dog"]);
///
/// assert!(solve("cat", "dog", &["cat", "dap", "cep", "pop"]).is_none());
/// assert!(solve("cat", "dogs", &["cat", "dogs"]).is_none());
/// ```
#[must_use]
pub fn solve<S: AsRef<str>>(start: &str, end: &str, dictionary: &[S]) -> Option<Ladder> {
    let start = Word::new(start).ok()?;
    let end = Word::new(end).ok()?;

    if start == end {
        return Some(Ladder::new(vec![start]));
    }

    if start.len() != end.len() {
        return None;
    }

    let index = DictionaryIndex::build(dictionary, start.len());
    Solver::new(&index).find_ladder(&start, &end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::NeighborStrategy;
    use crate::wordlists::WORDS;
    use proptest::prelude::*;
    use proptest::sample::Index;

    #[test]
    fn identical_words_give_single_word() {
        let ladder = solve("cat", "cat", &["dog"]).unwrap();
        assert_eq!(ladder.texts(), ["cat"]);
    }

    #[test]
    fn endpoints_are_normalized() {
        let ladder = solve("CAT", "Dat\r", &["cat", "dat"]).unwrap();
        assert_eq!(ladder.texts(), ["cat", "dat"]);
    }

    #[test]
    fn dictionary_is_normalized() {
        let ladder = solve("cat", "dog", &["CAT\r", "Cot\r", "cog\r", "DOG\r"]).unwrap();
        assert_eq!(ladder.texts(), ["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn invalid_endpoint_is_no_path() {
        assert!(solve("", "cat", &["cat"]).is_none());
        assert!(solve("c t", "cat", &["cat"]).is_none());
    }

    #[test]
    fn length_mismatch_ignores_dictionary() {
        assert!(solve("cat", "cats", &["cat", "cats", "cots"]).is_none());
    }

    #[test]
    fn embedded_cat_to_dog() {
        let ladder = solve("cat", "dog", WORDS).unwrap();
        assert_eq!(ladder.len(), 4);
        assert!(ladder.is_valid());
    }

    #[test]
    fn embedded_cold_to_warm() {
        let ladder = solve("cold", "warm", WORDS).unwrap();
        assert_eq!(ladder.len(), 5);
        assert!(ladder.is_valid());
        assert_eq!(ladder.start().map(Word::text), Some("cold"));
        assert_eq!(ladder.end().map(Word::text), Some("warm"));
    }

    #[test]
    fn embedded_matches_reference_distance() {
        let index = DictionaryIndex::build(WORDS, 4);
        let solver = Solver::new(&index);
        let pairs = [("head", "tail"), ("lead", "gold"), ("pole", "hurt"), ("fish", "bird")];

        for (start, end) in pairs {
            let start = Word::new(start).unwrap();
            let end = Word::new(end).unwrap();
            let expected = reference::shortest_distance(&index, &start, &end);
            let found = solver.find_ladder(&start, &end).map(|l| l.steps());
            assert_eq!(found, expected, "{start} -> {end}");
        }
    }

    /// Small dictionaries over a three-letter alphabet are densely connected
    fn small_dictionary() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[abc]{3}", 1..24)
    }

    proptest! {
        #[test]
        fn ladder_is_shortest_and_valid(
            words in small_dictionary(),
            from in any::<Index>(),
            to in any::<Index>(),
        ) {
            let start = Word::new(from.get(&words)).unwrap();
            let end = Word::new(to.get(&words)).unwrap();
            let index = DictionaryIndex::build(&words, 3);

            let expected = reference::shortest_distance(&index, &start, &end);
            let ladder = Solver::new(&index).find_ladder(&start, &end);

            prop_assert_eq!(ladder.as_ref().map(Ladder::steps), expected);

            if let Some(ladder) = ladder {
                prop_assert!(ladder.is_valid());
                prop_assert_eq!(ladder.start(), Some(&start));
                prop_assert_eq!(ladder.end(), Some(&end));
            }
        }

        #[test]
        fn search_is_idempotent(
            words in small_dictionary(),
            from in any::<Index>(),
            to in any::<Index>(),
        ) {
            let start = from.get(&words);
            let end = to.get(&words);

            prop_assert_eq!(solve(start, end, &words), solve(start, end, &words));
        }

        #[test]
        fn input_order_does_not_change_ladder(
            words in small_dictionary(),
            from in any::<Index>(),
            to in any::<Index>(),
        ) {
            let start = from.get(&words).clone();
            let end = to.get(&words).clone();
            let mut reversed = words.clone();
            reversed.reverse();

            prop_assert_eq!(solve(&start, &end, &words), solve(&start, &end, &reversed));
        }

        #[test]
        fn neighbor_strategies_agree(words in small_dictionary()) {
            let index = DictionaryIndex::build(&words, 3);
            let walk = index.with_strategy(NeighborStrategy::AlphabetWalk);
            let scan = index.with_strategy(NeighborStrategy::DictionaryScan);

            for word in index.words() {
                prop_assert_eq!(walk.neighbors(word), scan.neighbors(word));
            }
        }

        #[test]
        fn missing_endpoint_is_no_path(
            words in small_dictionary(),
            from in any::<Index>(),
        ) {
            let start = from.get(&words);
            // 'd' never appears in the generated words
            prop_assert!(solve(start, "ddd", &words).is_none());
            prop_assert!(solve("ddd", start, &words).is_none());
        }
    }
}
