//! Ladder word representation
//!
//! A Word stores a case-normalized string along with its characters for
//! per-position comparison and substitution.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A case-normalized dictionary word
///
/// Equality, ordering and hashing only look at the normalized text.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: Box<[char]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one character")]
    Empty,
    #[error("Word contains whitespace or control characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace and control characters (such as a trailing
    /// `\r` from a CRLF word list) are stripped and the text is lower-cased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing remains after trimming
    /// - Whitespace or control characters remain inside the word
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cold\r").unwrap();
    /// assert_eq!(word.text(), "cold");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("  ").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text
            .as_ref()
            .trim_matches(|c: char| c.is_whitespace() || c.is_control());

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = trimmed.to_lowercase();
        let chars = text.chars().collect();

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: a Word has at least one character
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check whether `other` differs from this word in exactly one position
    ///
    /// Words of different lengths are never neighbors, and a word is never
    /// its own neighbor. Stops comparing at the second mismatch.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let cat = Word::new("cat").unwrap();
    /// assert!(cat.is_neighbor(&Word::new("cot").unwrap()));
    /// assert!(!cat.is_neighbor(&Word::new("cat").unwrap()));
    /// assert!(!cat.is_neighbor(&Word::new("dog").unwrap()));
    /// ```
    #[must_use]
    pub fn is_neighbor(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut differences = 0;
        for (a, b) in self.chars.iter().zip(other.chars.iter()) {
            if a != b {
                differences += 1;
                if differences > 1 {
                    return false;
                }
            }
        }

        differences == 1
    }

    /// Build the text obtained by replacing the character at `position`
    ///
    /// Used by the alphabet walk to probe candidate neighbors.
    pub(crate) fn substituted(&self, position: usize, replacement: char) -> String {
        self.chars
            .iter()
            .enumerate()
            .map(|(i, &c)| if i == position { replacement } else { c })
            .collect()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cold").unwrap();
        assert_eq!(word.text(), "cold");
        assert_eq!(word.chars(), &['c', 'o', 'l', 'd']);
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("COLD").unwrap();
        assert_eq!(word.text(), "cold");

        let word2 = Word::new("CoLd").unwrap();
        assert_eq!(word2.text(), "cold");
    }

    #[test]
    fn word_creation_strips_carriage_return() {
        let word = Word::new("warm\r").unwrap();
        assert_eq!(word.text(), "warm");
        assert_eq!(word.len(), 4);

        let padded = Word::new("  warm\t").unwrap();
        assert_eq!(padded, word);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new(" \r\n"), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ca\u{0}t"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_length_counts_characters() {
        let word = Word::new("ÉTÉ").unwrap();
        assert_eq!(word.text(), "été");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("cold").unwrap();
        assert_eq!(word.char_at(0), 'c');
        assert_eq!(word.char_at(3), 'd');
    }

    #[test]
    fn neighbor_exactly_one_difference() {
        let cat = Word::new("cat").unwrap();
        assert!(cat.is_neighbor(&Word::new("dat").unwrap()));
        assert!(cat.is_neighbor(&Word::new("cet").unwrap()));
        assert!(cat.is_neighbor(&Word::new("cap").unwrap()));
    }

    #[test]
    fn neighbor_rejects_same_word() {
        let cat = Word::new("cat").unwrap();
        assert!(!cat.is_neighbor(&cat.clone()));
    }

    #[test]
    fn neighbor_rejects_two_or_more_differences() {
        let cat = Word::new("cat").unwrap();
        assert!(!cat.is_neighbor(&Word::new("cev").unwrap()));
        assert!(!cat.is_neighbor(&Word::new("dog").unwrap()));
    }

    #[test]
    fn neighbor_rejects_different_lengths() {
        let cat = Word::new("cat").unwrap();
        assert!(!cat.is_neighbor(&Word::new("cats").unwrap()));
    }

    #[test]
    fn substituted_replaces_one_position() {
        let cat = Word::new("cat").unwrap();
        assert_eq!(cat.substituted(0, 'b'), "bat");
        assert_eq!(cat.substituted(2, 'p'), "cap");
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("dog").unwrap(),
            Word::new("cat").unwrap(),
            Word::new("cog").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "cog", "dog"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("cold").unwrap();
        assert_eq!(format!("{word}"), "cold");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("cold").unwrap();
        let word2 = Word::new("COLD").unwrap();
        let word3 = Word::new("warm").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
