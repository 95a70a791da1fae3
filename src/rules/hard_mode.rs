//! Hard-mode guess validation
//!
//! In hard mode every revealed hint must be reused: a `Correct` letter has to stay
//! in its position and a `Present` letter has to appear somewhere in the guess.
//!
//! Rows are checked oldest first. Within a row all `Correct` positions are checked
//! (left to right) before any `Present` position, and the first failure is the one
//! reported. Only one violation is ever returned.

use crate::core::{Row, Verdict, WORD_LENGTH, Word};
use std::fmt;

/// The first hint a candidate guess fails to reuse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeViolation {
    /// `letter` must be at zero-based `position`
    MisplacedCorrect { position: usize, letter: u8 },
    /// `letter` must appear somewhere in the guess
    MissingPresent { letter: u8 },
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MisplacedCorrect { position, letter } => {
                let nth = position + 1;
                write!(
                    f,
                    "{nth}{} letter must be {}",
                    ordinal_suffix(nth),
                    char::from(letter.to_ascii_uppercase())
                )
            }
            Self::MissingPresent { letter } => {
                write!(f, "Guess must contain {}", char::from(letter.to_ascii_uppercase()))
            }
        }
    }
}

/// English ordinal suffix for a positive number
///
/// # Examples
/// ```
/// use wordull::rules::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "st");
/// assert_eq!(ordinal_suffix(12), "th");
/// assert_eq!(ordinal_suffix(23), "rd");
/// ```
#[must_use]
pub const fn ordinal_suffix(n: usize) -> &'static str {
    match (n % 10, n % 100) {
        (1, k) if k != 11 => "st",
        (2, k) if k != 12 => "nd",
        (3, k) if k != 13 => "rd",
        _ => "th",
    }
}

/// Check `candidate` against every hint revealed in `history`
///
/// Returns `None` when the candidate respects all hints. `Absent` verdicts never
/// constrain the candidate.
///
/// # Examples
/// ```
/// use wordull::core::{Evaluation, Word};
/// use wordull::rules::validate_hard_mode;
///
/// let history = [(Word::new("weary").unwrap(), "G----".parse::<Evaluation>().unwrap())];
///
/// let violation = validate_hard_mode(&Word::new("crane").unwrap(), &history).unwrap();
/// assert_eq!(violation.to_string(), "1st letter must be W");
///
/// assert!(validate_hard_mode(&Word::new("woken").unwrap(), &history).is_none());
/// ```
#[must_use]
pub fn validate_hard_mode(candidate: &Word, history: &[Row]) -> Option<HardModeViolation> {
    history
        .iter()
        .find_map(|(guess, evaluation)| check_row(candidate, guess, evaluation.verdicts()))
}

fn check_row(
    candidate: &Word,
    guess: &Word,
    verdicts: &[Verdict; WORD_LENGTH],
) -> Option<HardModeViolation> {
    let hints = || guess.letters().iter().copied().zip(verdicts.iter().copied()).enumerate();

    let misplaced = hints().find_map(|(position, (letter, verdict))| {
        (verdict == Verdict::Correct && candidate.letter_at(position) != letter)
            .then_some(HardModeViolation::MisplacedCorrect { position, letter })
    });
    if misplaced.is_some() {
        return misplaced;
    }

    hints().find_map(|(_, (letter, verdict))| {
        (verdict == Verdict::Present && !candidate.contains(letter))
            .then_some(HardModeViolation::MissingPresent { letter })
    })
}
