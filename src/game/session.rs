//! Guess submission for one day's game

use super::{GameState, GameStatus, MAX_GUESSES};
use crate::core::{Evaluation, InvalidInput, Word};
use crate::rules::{HardModeViolation, validate_hard_mode};
use crate::wordlists::WordList;
use log::debug;
use thiserror::Error;

/// Why a guess was not accepted
///
/// Messages are the ones shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Game already complete")]
    GameOver,
    #[error("Not enough letters")]
    NotEnoughLetters,
    #[error("Letters only: {0}")]
    InvalidInput(InvalidInput),
    #[error("{0}")]
    HardMode(HardModeViolation),
    #[error("Not in word list")]
    NotInWordList,
    #[error("Hard mode can only be changed at the start of a round")]
    HardModeLocked,
}

/// How a finished game ended, handed to statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub won: bool,
    /// Guesses used, 1..=6
    pub guesses: usize,
    /// Completion time of the game before this one
    pub previous_completed_ts: Option<i64>,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub evaluation: Evaluation,
    pub status: GameStatus,
    pub row_index: usize,
    /// Revealed only once the game has ended
    pub solution: Option<Word>,
    pub completion: Option<Completion>,
}

/// A day's game: the hidden solution and the visible state
#[derive(Debug, Clone)]
pub struct Game {
    solution: Word,
    state: GameState,
}

impl Game {
    #[must_use]
    pub const fn new(solution: Word, state: GameState) -> Self {
        Self { solution, state }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    pub const fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The solution, once the game is over
    #[must_use]
    pub fn revealed_solution(&self) -> Option<Word> {
        self.state.is_finished().then_some(self.solution)
    }

    /// Submit a guess at time `now_ms` (milliseconds since the epoch)
    ///
    /// Checks run in this order: word length, game already over, letters,
    /// hard-mode hints, word list.
    ///
    /// # Errors
    /// Returns the first `GuessError` that applies; the state is left untouched.
    ///
    /// # Examples
    /// ```
    /// use wordull::core::Word;
    /// use wordull::game::{Game, GameState, GameStatus};
    /// use wordull::wordlists::WordList;
    ///
    /// let mut game = Game::new(Word::new("alloy").unwrap(), GameState::new("2024-03-01", false));
    /// let submission = game.submit("llama", &WordList::any(), 0).unwrap();
    /// assert_eq!(submission.evaluation.to_tiles(), "🟨🟩🟨⬛⬛");
    /// assert_eq!(submission.status, GameStatus::InProgress);
    /// ```
    pub fn submit(
        &mut self,
        guess: &str,
        words: &WordList,
        now_ms: i64,
    ) -> Result<Submission, GuessError> {
        let guess = Word::new(guess);
        if let Err(InvalidInput::Length(_)) = guess {
            return Err(GuessError::NotEnoughLetters);
        }
        if self.state.is_finished() || self.state.row_index >= MAX_GUESSES {
            return Err(GuessError::GameOver);
        }
        let guess = guess.map_err(GuessError::InvalidInput)?;

        if self.state.hard_mode
            && let Some(violation) = validate_hard_mode(&guess, &self.state.history())
        {
            debug!("hard mode rejected {guess}: {violation}");
            return Err(GuessError::HardMode(violation));
        }

        if !words.accepts(&guess) {
            return Err(GuessError::NotInWordList);
        }

        let evaluation = Evaluation::calculate(&guess, &self.solution);
        let row = self.state.row_index;
        self.state.push_row(guess, evaluation);
        self.state.last_played_ts = Some(now_ms);

        if evaluation.is_solved() {
            self.state.status = GameStatus::Win;
        } else if row + 1 >= MAX_GUESSES {
            self.state.status = GameStatus::Fail;
        }
        debug!(
            "row {} {guess} {evaluation} -> {:?}",
            row + 1,
            self.state.status
        );

        let completion = self.state.is_finished().then(|| {
            let previous_completed_ts = self.state.last_completed_ts.replace(now_ms);
            Completion {
                won: self.state.status == GameStatus::Win,
                guesses: row + 1,
                previous_completed_ts,
            }
        });

        Ok(Submission {
            evaluation,
            status: self.state.status,
            row_index: self.state.row_index,
            solution: self.revealed_solution(),
            completion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn game(solution: &str, hard_mode: bool) -> Game {
        Game::new(
            Word::new(solution).unwrap(),
            GameState::new("2024-03-01", hard_mode),
        )
    }

    #[test]
    fn win_reveals_solution_and_completes() {
        let mut game = game("crane", false);
        game.submit("slate", &WordList::any(), 10).unwrap();
        let submission = game.submit("CRANE", &WordList::any(), 20).unwrap();

        assert_eq!(submission.status, GameStatus::Win);
        assert_eq!(submission.row_index, 2);
        assert_eq!(submission.solution, Some(Word::new("crane").unwrap()));
        assert_eq!(
            submission.completion,
            Some(Completion {
                won: true,
                guesses: 2,
                previous_completed_ts: None
            })
        );
        assert_eq!(game.state().last_completed_ts, Some(20));
        assert_eq!(game.state().last_played_ts, Some(20));
    }

    #[test]
    fn sixth_miss_fails() {
        let mut game = game("crane", false);
        for _ in 0..5 {
            let submission = game.submit("pilot", &WordList::any(), 0).unwrap();
            assert_eq!(submission.status, GameStatus::InProgress);
            assert_eq!(submission.solution, None);
            assert_eq!(submission.completion, None);
        }
        let submission = game.submit("pilot", &WordList::any(), 0).unwrap();
        assert_eq!(submission.status, GameStatus::Fail);
        assert_eq!(submission.solution.map(|w| w.to_string()).as_deref(), Some("CRANE"));
        assert!(!submission.completion.unwrap().won);
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut game = game("crane", false);
        for _ in 0..5 {
            game.submit("pilot", &WordList::any(), 0).unwrap();
        }
        let submission = game.submit("crane", &WordList::any(), 0).unwrap();
        assert_eq!(submission.status, GameStatus::Win);
        assert_eq!(submission.completion.unwrap().guesses, 6);
    }

    #[test]
    fn finished_game_rejects_guesses() {
        let mut game = game("crane", false);
        game.submit("crane", &WordList::any(), 0).unwrap();
        assert_eq!(
            game.submit("slate", &WordList::any(), 0),
            Err(GuessError::GameOver)
        );
        assert_eq!(game.state().row_index, 1);
    }

    #[test]
    fn length_checked_before_game_over() {
        let mut game = game("crane", false);
        game.submit("crane", &WordList::any(), 0).unwrap();
        assert_eq!(
            game.submit("cra", &WordList::any(), 0),
            Err(GuessError::NotEnoughLetters)
        );
        assert_eq!(
            game.submit("cr4ne", &WordList::any(), 0),
            Err(GuessError::GameOver)
        );
    }

    #[test]
    fn short_and_malformed_guesses() {
        let mut game = game("crane", false);
        assert_eq!(
            game.submit("cran", &WordList::any(), 0),
            Err(GuessError::NotEnoughLetters)
        );
        assert_eq!(
            game.submit("cr4ne", &WordList::any(), 0),
            Err(GuessError::InvalidInput(InvalidInput::NotALetter('4')))
        );
        assert_eq!(game.state().row_index, 0);
    }

    #[test]
    fn hard_mode_blocks_before_word_list() {
        let mut game = game("weary", true);
        let words: WordList = words_from_slice(&["wound", "crane"]).into_iter().collect();
        game.submit("wound", &words, 0).unwrap();

        // "zzzzz" is not in the list either, but the hint check runs first
        let err = game.submit("zzzzz", &words, 0).unwrap_err();
        assert_eq!(err.to_string(), "1st letter must be W");

        let err = game.submit("crane", &words, 0).unwrap_err();
        assert_eq!(err.to_string(), "1st letter must be W");
    }

    #[test]
    fn hard_mode_off_ignores_hints() {
        let mut game = game("weary", false);
        game.submit("wound", &WordList::any(), 0).unwrap();
        assert!(game.submit("crane", &WordList::any(), 0).is_ok());
    }

    #[test]
    fn word_list_rejection() {
        let mut game = game("crane", false);
        let words: WordList = words_from_slice(&["crane"]).into_iter().collect();
        assert_eq!(game.submit("qzxjv", &words, 0), Err(GuessError::NotInWordList));
        assert_eq!(game.state().row_index, 0);
    }

    #[test]
    fn previous_completion_carried_into_next_day() {
        let mut first = game("crane", false);
        first.submit("crane", &WordList::any(), 1_000).unwrap();

        let state = first.state().next_day("2024-03-02", false);
        let mut second = Game::new(Word::new("slate").unwrap(), state);
        let submission = second.submit("slate", &WordList::any(), 2_000).unwrap();
        assert_eq!(submission.completion.unwrap().previous_completed_ts, Some(1_000));
    }
}
