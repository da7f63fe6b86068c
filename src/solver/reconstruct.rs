//! Ladder reconstruction from the two parent maps

use super::frontier::ParentMap;
use crate::core::{Ladder, Word};

/// Rebuild the ladder through `meeting`
///
/// The forward map leads from `meeting` back to `start`, the backward map
/// from `meeting` on to `end`. At every word the first recorded predecessor
/// is followed. Returns `None` only if a chain is broken, which the search
/// never produces.
pub(super) fn build_ladder<'a>(
    forward: &ParentMap<'a>,
    backward: &ParentMap<'a>,
    start: &'a Word,
    end: &'a Word,
    meeting: &'a Word,
) -> Option<Ladder> {
    let mut words = follow(forward, meeting, start)?;
    words.reverse();

    let towards_end = follow(backward, meeting, end)?;
    words.extend(towards_end.into_iter().skip(1));

    Some(Ladder::new(words.into_iter().cloned().collect()))
}

/// Chain of first predecessors from `from` to `to`, both included
fn follow<'a>(parents: &ParentMap<'a>, from: &'a Word, to: &'a Word) -> Option<Vec<&'a Word>> {
    let mut chain = vec![from];
    let mut current = from;

    while current != to {
        current = parents.get(current)?.first().copied()?;
        chain.push(current);
    }

    Some(chain)
}
