//! Keyboard letter colouring
//!
//! Each letter shows the best verdict it has received in any row.

use crate::core::{Row, Verdict};
use rustc_hash::FxHashMap;

/// Best verdict seen per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatusMap {
    statuses: FxHashMap<u8, Verdict>,
}

impl LetterStatusMap {
    /// Status for an upper- or lower-case letter, `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Verdict> {
        self.statuses.get(&letter.to_ascii_uppercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Letters and their statuses in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, Verdict)> {
        let mut entries: Vec<(char, Verdict)> = self
            .statuses
            .iter()
            .map(|(&letter, &verdict)| (char::from(letter), verdict))
            .collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }

    fn upgrade(&mut self, letter: u8, verdict: Verdict) {
        let entry = self.statuses.entry(letter).or_insert(verdict);
        if verdict.priority() > entry.priority() {
            *entry = verdict;
        }
    }
}

/// Build the letter map from the full history
///
/// Always rebuilt from scratch, so a letter can only move up in priority as rows
/// are added.
///
/// # Examples
/// ```
/// use wordull::core::{Evaluation, Verdict, Word};
/// use wordull::rules::aggregate;
///
/// let history = [
///     (Word::new("crane").unwrap(), "-Y---".parse::<Evaluation>().unwrap()),
///     (Word::new("order").unwrap(), "-G---".parse::<Evaluation>().unwrap()),
/// ];
/// let letters = aggregate(&history);
/// assert_eq!(letters.get(b'R'), Some(Verdict::Correct));
/// assert_eq!(letters.get(b'C'), Some(Verdict::Absent));
/// assert_eq!(letters.get(b'Z'), None);
/// ```
#[must_use]
pub fn aggregate(history: &[Row]) -> LetterStatusMap {
    let mut map = LetterStatusMap::default();
    for (guess, evaluation) in history {
        for (&letter, &verdict) in guess.letters().iter().zip(evaluation.verdicts()) {
            map.upgrade(letter, verdict);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Evaluation, Word};
    use proptest::prelude::*;

    fn row(guess: &str, feedback: &str) -> Row {
        (Word::new(guess).unwrap(), feedback.parse::<Evaluation>().unwrap())
    }

    #[test]
    fn empty_history() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn duplicate_letter_in_one_row_keeps_best() {
        // First E absent, second E correct
        let letters = aggregate(&[row("geese", "---YG")]);
        assert_eq!(letters.get(b'E'), Some(Verdict::Correct));
        assert_eq!(letters.get(b'S'), Some(Verdict::Present));
        assert_eq!(letters.get(b'G'), Some(Verdict::Absent));
        assert_eq!(letters.len(), 3);
    }

    #[test]
    fn later_absent_never_downgrades() {
        let letters = aggregate(&[row("crane", "G----"), row("cloud", "-----")]);
        assert_eq!(letters.get(b'C'), Some(Verdict::Correct));
    }

    #[test]
    fn present_upgraded_to_correct() {
        let letters = aggregate(&[row("crane", "-Y---"), row("broad", "-G---")]);
        assert_eq!(letters.get(b'r'), Some(Verdict::Correct));
    }

    #[test]
    fn sorted_is_alphabetical() {
        let letters = aggregate(&[row("crane", "--G--")]);
        let keys: String = letters.sorted().iter().map(|&(c, _)| c).collect();
        assert_eq!(keys, "ACENR");
    }

    fn row_strategy() -> impl Strategy<Value = Row> {
        ("[a-h]{5}", "[GY-]{5}").prop_map(|(guess, feedback)| row(&guess, &feedback))
    }

    proptest! {
        #[test]
        fn adding_a_row_never_downgrades(
            history in prop::collection::vec(row_strategy(), 0..6),
            extra in row_strategy(),
        ) {
            let before = aggregate(&history);
            let mut extended = history.clone();
            extended.push(extra);
            let after = aggregate(&extended);

            for (letter, verdict) in before.sorted() {
                let upgraded = after.get(letter as u8).unwrap();
                prop_assert!(upgraded.priority() >= verdict.priority());
            }
        }

        #[test]
        fn order_of_rows_does_not_matter(
            history in prop::collection::vec(row_strategy(), 0..6),
        ) {
            let mut reversed = history.clone();
            reversed.reverse();
            prop_assert_eq!(aggregate(&history), aggregate(&reversed));
        }
    }
}
