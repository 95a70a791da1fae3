//! Hard-mode check of a candidate guess against typed-in rows

use crate::core::{Evaluation, InvalidInput, Row, Word};
use crate::rules::{HardModeViolation, validate_hard_mode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("row '{0}' must look like GUESS:PATTERN, e.g. WEARY:G-Y--")]
    MissingSeparator(String),
    #[error("invalid word in row '{row}': {source}")]
    Word {
        row: String,
        #[source]
        source: InvalidInput,
    },
    #[error("{0}")]
    Pattern(String),
}

pub struct CheckReport {
    pub candidate: Word,
    pub history: Vec<Row>,
    pub violation: Option<HardModeViolation>,
}

/// Parse `GUESS:PATTERN`, where the pattern uses `G`, `Y` and `-`
///
/// # Errors
///
/// Returns `RowParseError` for a missing `:`, a bad word or a bad pattern.
///
/// # Examples
/// ```
/// use wordull::commands::parse_row;
///
/// let (guess, evaluation) = parse_row("weary:G-Y--").unwrap();
/// assert_eq!(guess.as_str(), "WEARY");
/// assert_eq!(evaluation.to_tiles(), "🟩⬛🟨⬛⬛");
/// ```
pub fn parse_row(row: &str) -> Result<Row, RowParseError> {
    let (guess, pattern) = row
        .split_once(':')
        .ok_or_else(|| RowParseError::MissingSeparator(row.to_string()))?;
    let guess = Word::new(guess.trim()).map_err(|source| RowParseError::Word {
        row: row.to_string(),
        source,
    })?;
    let evaluation = pattern
        .trim()
        .parse::<Evaluation>()
        .map_err(RowParseError::Pattern)?;
    Ok((guess, evaluation))
}

/// Run the hard-mode validator for `candidate` against `rows`, oldest first
///
/// # Errors
///
/// Returns `RowParseError` if the candidate or any row is malformed.
pub fn check_candidate<S: AsRef<str>>(
    candidate: &str,
    rows: &[S],
) -> Result<CheckReport, RowParseError> {
    let candidate = Word::new(candidate).map_err(|source| RowParseError::Word {
        row: candidate.to_string(),
        source,
    })?;
    let history = rows
        .iter()
        .map(|row| parse_row(row.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let violation = validate_hard_mode(&candidate, &history);

    Ok(CheckReport {
        candidate,
        history,
        violation,
    })
}
