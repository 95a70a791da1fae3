//! Core domain types for Wordull
//!
//! Pure values and the guess evaluator. Nothing here touches I/O or holds state
//! between calls.

mod evaluation;
mod verdict;
mod word;

pub use evaluation::{Evaluation, evaluate};
pub use verdict::Verdict;
pub use word::{InvalidInput, WORD_LENGTH, Word};

/// One submitted guess with its evaluation, oldest first in a history
pub type Row = (Word, Evaluation);
