//! Per-direction search state
//!
//! Each direction of the bidirectional search owns its frontier, visited
//! set and parent map. None of it is shared with the other direction or
//! with other queries.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Word -> predecessors that discovered it, in discovery order
pub(super) type ParentMap<'a> = FxHashMap<&'a Word, Vec<&'a Word>>;

/// Which endpoint a search side grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Seeded with the start word
    Forward,
    /// Seeded with the end word
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// One direction of the bidirectional search
#[derive(Debug)]
pub(super) struct Side<'a> {
    pub(super) direction: Direction,
    /// Depth of the words currently in `frontier`
    pub(super) depth: usize,
    pub(super) frontier: Vec<&'a Word>,
    /// Every word this side discovered, with its depth
    pub(super) visited: FxHashMap<&'a Word, usize>,
    pub(super) parents: ParentMap<'a>,
}

impl<'a> Side<'a> {
    pub(super) fn new(direction: Direction, seed: &'a Word) -> Self {
        let mut visited = FxHashMap::default();
        visited.insert(seed, 0);

        Self {
            direction,
            depth: 0,
            frontier: vec![seed],
            visited,
            parents: ParentMap::default(),
        }
    }

    #[inline]
    pub(super) fn has_visited(&self, word: &Word) -> bool {
        self.visited.contains_key(word)
    }

    /// Handle `word` reached from `parent` on the current frontier
    ///
    /// Returns true the first time the word is seen. A word seen earlier in
    /// the same round gains `parent` as an additional predecessor.
    pub(super) fn discover(&mut self, word: &'a Word, parent: &'a Word) -> bool {
        let next_depth = self.depth + 1;

        match self.visited.get(word).copied() {
            None => {
                self.visited.insert(word, next_depth);
                self.record(word, parent);
                true
            }
            Some(depth) if depth == next_depth => {
                self.record(word, parent);
                false
            }
            Some(_) => false,
        }
    }

    /// Append `parent` to the predecessors of `word`
    pub(super) fn record(&mut self, word: &'a Word, parent: &'a Word) {
        let parents = self.parents.entry(word).or_default();
        if !parents.contains(&parent) {
            parents.push(parent);
        }
    }

    /// Replace the frontier with the words discovered this round
    pub(super) fn advance(&mut self, next: Vec<&'a Word>) {
        self.frontier = next;
        self.depth += 1;
    }
}
