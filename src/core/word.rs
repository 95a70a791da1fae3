//! Five-letter word representation
//!
//! Guesses and solutions share one type. Input is case-insensitive and stored in
//! upper case, which is how the board, the keyboard and every message show it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every guess and solution
pub const WORD_LENGTH: usize = 5;

/// Rejection reason for text that cannot be a guess or a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("word must be exactly 5 letters, got {0}")]
    Length(usize),
    #[error("word must contain only letters A-Z, found {0:?}")]
    NotALetter(char),
}

/// A validated five-letter word in upper case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Validate and normalise a word
    ///
    /// # Errors
    /// Returns `InvalidInput::Length` unless the input has exactly five characters,
    /// and `InvalidInput::NotALetter` for anything outside ASCII `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use wordull::core::{InvalidInput, Word};
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "CRANE");
    ///
    /// assert_eq!(Word::new("cranes"), Err(InvalidInput::Length(6)));
    /// assert_eq!(Word::new("cr4ne"), Err(InvalidInput::NotALetter('4')));
    /// ```
    pub fn new(text: &str) -> Result<Self, InvalidInput> {
        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(InvalidInput::Length(count));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(InvalidInput::NotALetter(ch));
            }
            *slot = ch.to_ascii_uppercase() as u8;
        }

        Ok(Self(letters))
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Letter at a zero-based position
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter.to_ascii_uppercase())
    }

    /// The word as text
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.as_str(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
    }

    #[test]
    fn word_creation_case_normalized() {
        assert_eq!(Word::new("crane").unwrap().as_str(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap(), Word::new("CRANE").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(InvalidInput::Length(8)));
        assert_eq!(Word::new("shrt"), Err(InvalidInput::Length(4)));
        assert_eq!(Word::new(""), Err(InvalidInput::Length(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // Four letters plus a two-byte character is still five characters
        assert_eq!(Word::new("cafés"), Err(InvalidInput::NotALetter('é')));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(InvalidInput::NotALetter('3')));
        assert_eq!(Word::new("cran "), Err(InvalidInput::NotALetter(' ')));
        assert_eq!(Word::new("cran!"), Err(InvalidInput::NotALetter('!')));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_contains_is_case_insensitive() {
        let word = Word::new("crane").unwrap();
        assert!(word.contains(b'C'));
        assert!(word.contains(b'r'));
        assert!(!word.contains(b'Z'));
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "weary".parse().unwrap();
        assert_eq!(format!("{word}"), "WEARY");
    }
}
