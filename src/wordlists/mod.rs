//! Word lists
//!
//! The embedded answers provide practice solutions. A `WordList` decides which
//! guesses are accepted.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Set of accepted guesses
///
/// An empty list accepts any five-letter word.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<Word>,
}

impl WordList {
    /// A list that accepts any well-formed word
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        self.words.is_empty() || self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
