//! Word ladder (solution path) representation
//!
//! A ladder is the ordered sequence of words from the start word to the end
//! word, where every consecutive pair differs in exactly one position.

use super::Word;
use std::fmt;

/// A reconstructed word ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    /// Wrap an ordered word sequence
    ///
    /// The sequence is expected to be non-empty; the solver only builds
    /// ladders from a start word onwards.
    #[must_use]
    pub(crate) fn new(words: Vec<Word>) -> Self {
        debug_assert!(!words.is_empty(), "a ladder always contains its start word");
        Self { words }
    }

    /// The words of the ladder, start first
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Consume the ladder, returning its words
    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Number of words in the ladder (at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for ladders produced by the solver
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of single-character changes (graph distance)
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// First word of the ladder
    #[must_use]
    pub fn start(&self) -> Option<&Word> {
        self.words.first()
    }

    /// Last word of the ladder
    #[must_use]
    pub fn end(&self) -> Option<&Word> {
        self.words.last()
    }

    /// Check that every consecutive pair differs in exactly one position
    ///
    /// # Examples
    /// ```
    /// use word_ladder::solve;
    ///
    /// let ladder = solve("cat", "dog", &["cat", "cot", "cog", "dog"]).unwrap();
    /// assert!(ladder.is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.words.is_empty() && self.words.windows(2).all(|pair| pair[0].is_neighbor(&pair[1]))
    }

    /// Texts of the ladder's words, start first
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
