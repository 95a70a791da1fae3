//! A run of games played in one terminal session
//!
//! Owns the current game, the accepted word list and the running statistics, and
//! threads them through the pure rules on every guess.

use super::stats::MS_PER_DAY;
use super::{
    Completion, Game, GameState, GuessError, ImportStats, Statistics, Submission,
};
use crate::core::Word;
use crate::rules::{LetterStatusMap, aggregate};
use crate::wordlists::WordList;
use log::debug;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PracticeError {
    #[error("no solutions to choose from")]
    NoSolutions,
}

/// Where each round's solution comes from
#[derive(Debug, Clone)]
pub enum SolutionSource {
    /// Same word every round
    Fixed(Word),
    /// Uniformly random pick per round
    Random(Vec<Word>),
}

impl SolutionSource {
    fn pick(&self) -> Option<Word> {
        use rand::prelude::IndexedRandom;

        match self {
            Self::Fixed(word) => Some(*word),
            Self::Random(words) => words.choose(&mut rand::rng()).copied(),
        }
    }
}

pub struct Practice {
    solutions: SolutionSource,
    words: WordList,
    hard_mode: bool,
    game: Game,
    stats: Statistics,
    round: usize,
    last_completed_round: Option<usize>,
}

impl Practice {
    /// Start the first round
    ///
    /// # Errors
    /// Returns `PracticeError::NoSolutions` for an empty random source.
    pub fn new(
        solutions: SolutionSource,
        words: WordList,
        hard_mode: bool,
    ) -> Result<Self, PracticeError> {
        let solution = solutions.pick().ok_or(PracticeError::NoSolutions)?;
        let game = Game::new(solution, GameState::new(round_label(1), hard_mode));
        debug!("round 1 started (hard mode: {hard_mode})");

        Ok(Self {
            solutions,
            words,
            hard_mode,
            game,
            stats: Statistics::default(),
            round: 1,
            last_completed_round: None,
        })
    }

    /// Abandon or finish the current game and start another
    ///
    /// Every round is its own streak day, so abandoning an unfinished round
    /// breaks the streak.
    pub fn new_round(&mut self) {
        let Some(solution) = self.solutions.pick() else {
            return;
        };
        self.stats.reconcile_new_day(self.game.state().status, 1);
        self.round += 1;
        let state = self
            .game
            .state()
            .next_day(round_label(self.round), self.hard_mode);
        self.game = Game::new(solution, state);
        debug!("round {} started (hard mode: {})", self.round, self.hard_mode);
    }

    /// Submit a guess now
    ///
    /// # Errors
    /// See [`Game::submit`].
    pub fn submit(&mut self, guess: &str) -> Result<Submission, GuessError> {
        self.submit_at(guess, now_ms())
    }

    /// Submit a guess at an explicit time, recording statistics when the game ends
    ///
    /// # Errors
    /// See [`Game::submit`].
    pub fn submit_at(&mut self, guess: &str, now_ms: i64) -> Result<Submission, GuessError> {
        let submission = self.game.submit(guess, &self.words, now_ms)?;
        if let Some(completion) = &submission.completion {
            // Streaks count rounds, not wall-clock days
            let completion = Completion {
                previous_completed_ts: self.last_completed_round.map(round_day),
                ..*completion
            };
            self.stats.record(&completion, round_day(self.round));
            self.last_completed_round = Some(self.round);
            debug!("statistics now {:?}", self.stats);
        }
        Ok(submission)
    }

    /// Replace the session statistics with exported ones
    pub fn import_stats(&mut self, imported: &ImportStats) {
        self.stats.import(imported);
        debug!("imported statistics: {:?}", self.stats);
    }

    /// Toggle hard mode for this and later rounds
    ///
    /// # Errors
    /// Returns `GuessError::HardModeLocked` mid-game.
    pub fn set_hard_mode(&mut self, enabled: bool) -> Result<(), GuessError> {
        self.game.state_mut().set_hard_mode(enabled)?;
        self.hard_mode = enabled;
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        self.game.state()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub fn revealed_solution(&self) -> Option<Word> {
        self.game.revealed_solution()
    }

    /// Keyboard colours for the current board
    #[must_use]
    pub fn letters(&self) -> LetterStatusMap {
        aggregate(&self.game.state().history())
    }
}

/// Timestamp standing in for a round's day
fn round_day(round: usize) -> i64 {
    i64::try_from(round).map_or(i64::MAX, |round| round.saturating_mul(MS_PER_DAY))
}

fn round_label(round: usize) -> String {
    format!("practice-{round}")
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
