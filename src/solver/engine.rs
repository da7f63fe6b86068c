//! Bidirectional breadth-first ladder search

use super::frontier::{Direction, Side};
use super::reconstruct::build_ladder;
use crate::core::{Ladder, Word};
use crate::dictionary::DictionaryIndex;

/// Counters collected while searching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Expansion rounds run (one frontier layer each)
    pub rounds: usize,
    /// Frontier words whose neighbors were generated
    pub words_expanded: usize,
    /// Words discovered from the start side, seed included
    pub forward_visited: usize,
    /// Words discovered from the end side, seed included
    pub backward_visited: usize,
    /// Side whose expansion found the meeting word
    pub met_from: Option<Direction>,
}

/// Outcome of one search
#[derive(Debug, Clone)]
pub struct Search {
    /// Shortest ladder, or `None` when the endpoints are not connected
    pub ladder: Option<Ladder>,
    /// Counters from the search that produced `ladder`
    pub stats: SearchStats,
}

/// Word ladder solver over a prebuilt index
///
/// The solver only borrows the index; every search owns its own frontiers,
/// visited sets and parent maps, so one index can serve many searches.
pub struct Solver<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }

    /// The index this solver searches
    #[must_use]
    pub const fn index(&self) -> &'a DictionaryIndex {
        self.index
    }

    /// Find a shortest ladder from `start` to `end`
    ///
    /// Returns `None` when the words differ in length, either word is not
    /// in the index, or no chain connects them.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::{DictionaryIndex, Solver, Word};
    ///
    /// let index = DictionaryIndex::build(["cold", "cord", "card", "ward", "warm"], 4);
    /// let solver = Solver::new(&index);
    ///
    /// let start = Word::new("cold").unwrap();
    /// let end = Word::new("warm").unwrap();
    /// let ladder = solver.find_ladder(&start, &end).unwrap();
    /// assert_eq!(ladder.texts(), ["cold", "cord", "card", "ward", "warm"]);
    /// ```
    #[must_use]
    pub fn find_ladder(&self, start: &Word, end: &Word) -> Option<Ladder> {
        self.search(start, end).ladder
    }

    /// Run the search and keep its counters
    #[must_use]
    pub fn search(&self, start: &Word, end: &Word) -> Search {
        let mut stats = SearchStats::default();

        if start == end {
            return Search {
                ladder: Some(Ladder::new(vec![start.clone()])),
                stats,
            };
        }

        if start.len() != end.len() {
            tracing::debug!(%start, %end, "endpoint lengths differ");
            return Search { ladder: None, stats };
        }

        let (Some(start), Some(end)) = (self.index.get(start), self.index.get(end)) else {
            tracing::debug!(%start, %end, "endpoint missing from dictionary");
            return Search { ladder: None, stats };
        };

        let mut forward = Side::new(Direction::Forward, start);
        let mut backward = Side::new(Direction::Backward, end);

        let meeting = loop {
            if forward.frontier.is_empty() || backward.frontier.is_empty() {
                break None;
            }

            stats.rounds += 1;

            // Grow the smaller frontier; ties go forward
            let (current, opposite) = if forward.frontier.len() > backward.frontier.len() {
                (&mut backward, &forward)
            } else {
                (&mut forward, &backward)
            };

            tracing::trace!(
                round = stats.rounds,
                direction = current.direction.name(),
                depth = current.depth,
                frontier = current.frontier.len(),
                "expanding frontier"
            );

            if let Some(word) = self.expand(current, opposite, &mut stats) {
                stats.met_from = Some(current.direction);
                break Some(word);
            }
        };

        stats.forward_visited = forward.visited.len();
        stats.backward_visited = backward.visited.len();

        let ladder = meeting
            .and_then(|word| build_ladder(&forward.parents, &backward.parents, start, end, word));

        tracing::debug!(
            %start,
            %end,
            rounds = stats.rounds,
            expanded = stats.words_expanded,
            forward_visited = stats.forward_visited,
            backward_visited = stats.backward_visited,
            steps = ?ladder.as_ref().map(Ladder::steps),
            "ladder search finished"
        );

        Search { ladder, stats }
    }

    /// Expand every word of `current`'s frontier by one step
    ///
    /// Returns the meeting word as soon as a neighbor is already known to
    /// the opposite side; the rest of the round is skipped.
    fn expand(
        &self,
        current: &mut Side<'a>,
        opposite: &Side<'a>,
        stats: &mut SearchStats,
    ) -> Option<&'a Word> {
        let frontier = std::mem::take(&mut current.frontier);
        let mut next = Vec::new();

        for word in frontier {
            stats.words_expanded += 1;

            for neighbor in self.index.neighbors(word) {
                if opposite.has_visited(neighbor) {
                    current.record(neighbor, word);
                    return Some(neighbor);
                }

                if current.discover(neighbor, word) {
                    next.push(neighbor);
                }
            }
        }

        current.advance(next);
        None
    }
}
