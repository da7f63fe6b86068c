//! Single-direction BFS used as a test oracle
//!
//! Explores level by level from the start word only, keeping the full path
//! to every discovered word. Slow but obviously correct.

use crate::core::Word;
use crate::dictionary::DictionaryIndex;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Shortest number of steps from `start` to `end`, if any chain exists
pub(crate) fn shortest_distance(index: &DictionaryIndex, start: &Word, end: &Word) -> Option<usize> {
    shortest_path(index, start, end).map(|path| path.len() - 1)
}

/// Shortest path from `start` to `end` found by a plain queue-based BFS
pub(crate) fn shortest_path<'a>(
    index: &'a DictionaryIndex,
    start: &Word,
    end: &Word,
) -> Option<Vec<&'a Word>> {
    if start.len() != end.len() {
        return None;
    }

    let start = index.get(start)?;
    let end = index.get(end)?;

    let mut paths: FxHashMap<&Word, Vec<&Word>> = FxHashMap::default();
    paths.insert(start, vec![start]);

    let mut queue = VecDeque::from([start]);

    while let Some(word) = queue.pop_front() {
        if word == end {
            return paths.remove(end);
        }

        for neighbor in index.neighbors(word) {
            if paths.contains_key(neighbor) {
                continue;
            }

            let mut path = paths[word].clone();
            path.push(neighbor);
            paths.insert(neighbor, path);
            queue.push_back(neighbor);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_finds_distance() {
        let index = DictionaryIndex::build(["cat", "cot", "cog", "dog"], 3);
        let cat = Word::new("cat").unwrap();
        let dog = Word::new("dog").unwrap();

        assert_eq!(shortest_distance(&index, &cat, &dog), Some(3));
        assert_eq!(shortest_distance(&index, &cat, &cat), Some(0));
    }

    #[test]
    fn reference_reports_unreachable() {
        let index = DictionaryIndex::build(["cat", "dat", "dog"], 3);
        let cat = Word::new("cat").unwrap();
        let dog = Word::new("dog").unwrap();

        assert_eq!(shortest_distance(&index, &cat, &dog), None);
    }
}
