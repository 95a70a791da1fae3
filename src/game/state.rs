//! Per-day game state
//!
//! Field names and layout follow the JSON document the game has always stored:
//! six board slots with `""` for unused rows and a parallel list of evaluations
//! with `null` for unused rows.

use super::GuessError;
use crate::core::{Evaluation, Row, Word};
use serde::{Deserialize, Serialize};

/// Maximum number of guesses per day
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    InProgress,
    Win,
    Fail,
}

/// Everything known about one day's game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board_state: Vec<String>,
    pub evaluations: Vec<Option<Evaluation>>,
    /// Number of completed guesses
    pub row_index: usize,
    #[serde(rename = "gameStatus")]
    pub status: GameStatus,
    pub hard_mode: bool,
    /// Day the game belongs to, `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub last_played_ts: Option<i64>,
    #[serde(default)]
    pub last_completed_ts: Option<i64>,
}

impl GameState {
    /// Fresh board for `date`
    #[must_use]
    pub fn new(date: impl Into<String>, hard_mode: bool) -> Self {
        Self {
            board_state: vec![String::new(); MAX_GUESSES],
            evaluations: vec![None; MAX_GUESSES],
            row_index: 0,
            status: GameStatus::InProgress,
            hard_mode,
            date: date.into(),
            last_played_ts: None,
            last_completed_ts: None,
        }
    }

    /// Start the next day's board, keeping the last completion time for streaks
    #[must_use]
    pub fn next_day(&self, date: impl Into<String>, hard_mode: bool) -> Self {
        Self {
            last_completed_ts: self.last_completed_ts,
            ..Self::new(date, hard_mode)
        }
    }

    /// Submitted rows, oldest first
    ///
    /// Rows below `row_index` that are missing a guess or an evaluation, or whose
    /// guess is not a valid word, are skipped.
    #[must_use]
    pub fn history(&self) -> Vec<Row> {
        self.board_state
            .iter()
            .zip(&self.evaluations)
            .take(self.row_index)
            .filter_map(|(guess, evaluation)| {
                let evaluation = (*evaluation)?;
                Word::new(guess).ok().map(|word| (word, evaluation))
            })
            .collect()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.row_index)
    }

    /// Toggle hard mode
    ///
    /// # Errors
    /// Returns `GuessError::HardModeLocked` once a guess has been made in a game
    /// that is still in progress.
    pub fn set_hard_mode(&mut self, enabled: bool) -> Result<(), GuessError> {
        if self.status == GameStatus::InProgress && self.row_index > 0 {
            return Err(GuessError::HardModeLocked);
        }
        self.hard_mode = enabled;
        Ok(())
    }

    /// Store a scored row at the current index and advance it
    pub(crate) fn push_row(&mut self, guess: Word, evaluation: Evaluation) {
        let row = self.row_index;
        if let Some(slot) = self.board_state.get_mut(row) {
            *slot = guess.to_string();
        }
        if let Some(slot) = self.evaluations.get_mut(row) {
            *slot = Some(evaluation);
        }
        self.row_index = row + 1;
    }
}
