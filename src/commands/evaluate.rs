//! Score a list of guesses against a known solution

use crate::core::{Evaluation, InvalidInput, Row, Word};
use crate::rules::{LetterStatusMap, aggregate};

/// Scored rows plus the resulting keyboard
pub struct EvaluationReport {
    pub solution: Word,
    pub rows: Vec<Row>,
    pub letters: LetterStatusMap,
    /// 1-based row of the first fully correct guess
    pub solved_at: Option<usize>,
}

/// Evaluate each guess in order
///
/// # Errors
///
/// Returns `InvalidInput` if the solution or any guess is not five letters.
pub fn evaluate_guesses<S: AsRef<str>>(
    solution: &str,
    guesses: &[S],
) -> Result<EvaluationReport, InvalidInput> {
    let solution = Word::new(solution)?;
    let rows = guesses
        .iter()
        .map(|guess| {
            let guess = Word::new(guess.as_ref())?;
            Ok((guess, Evaluation::calculate(&guess, &solution)))
        })
        .collect::<Result<Vec<Row>, InvalidInput>>()?;

    let solved_at = rows
        .iter()
        .position(|(_, evaluation)| evaluation.is_solved())
        .map(|i| i + 1);
    let letters = aggregate(&rows);

    Ok(EvaluationReport {
        solution,
        rows,
        letters,
        solved_at,
    })
}
