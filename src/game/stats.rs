//! Win/loss statistics and streaks

use super::{Completion, GameStatus, MAX_GUESSES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub(crate) const MS_PER_DAY: i64 = 86_400_000;

/// Wins per guess count plus losses
///
/// Serialized as `{"1": n, ..., "6": n, "fail": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, u32>", from = "BTreeMap<String, u32>")]
pub struct GuessDistribution {
    pub wins: [u32; MAX_GUESSES],
    pub fail: u32,
}

impl GuessDistribution {
    /// Wins that took `guesses` guesses (1..=6)
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> u32 {
        guesses
            .checked_sub(1)
            .and_then(|i| self.wins.get(i))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn total_wins(&self) -> u32 {
        self.wins.iter().sum()
    }

    fn total_guesses(&self) -> u64 {
        (1u64..)
            .zip(self.wins)
            .map(|(guesses, count)| guesses * u64::from(count))
            .sum()
    }
}

impl From<GuessDistribution> for BTreeMap<String, u32> {
    fn from(distribution: GuessDistribution) -> Self {
        let mut map: Self = (1..)
            .zip(distribution.wins)
            .map(|(guesses, count): (usize, u32)| (guesses.to_string(), count))
            .collect();
        map.insert("fail".to_string(), distribution.fail);
        map
    }
}

impl From<BTreeMap<String, u32>> for GuessDistribution {
    /// Unknown keys are ignored
    fn from(map: BTreeMap<String, u32>) -> Self {
        let mut distribution = Self::default();
        for (key, count) in map {
            if key == "fail" {
                distribution.fail = count;
            } else if let Ok(guesses @ 1..=MAX_GUESSES) = key.parse::<usize>() {
                distribution.wins[guesses - 1] = count;
            }
        }
        distribution
    }
}

/// Player statistics across days
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub current_streak: u32,
    pub max_streak: u32,
    pub guesses: GuessDistribution,
    pub win_percentage: u32,
    pub games_played: u32,
    pub games_won: u32,
    pub average_guesses: u32,
}

/// Statistics carried over from another device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportStats {
    pub games_played: u32,
    /// Recomputed from the other fields when absent
    #[serde(default)]
    pub win_percentage: Option<u32>,
    pub current_streak: u32,
    pub max_streak: u32,
    pub guesses: GuessDistribution,
}

impl Statistics {
    /// Record a finished game completed at `now_ms`
    pub fn record(&mut self, completion: &Completion, now_ms: i64) {
        if completion.won {
            let days = completion
                .previous_completed_ts
                .map(|previous| days_between(previous, now_ms));
            self.record_win(completion.guesses, days);
        } else {
            self.record_loss();
        }
    }

    /// Record a win in `guesses` guesses
    ///
    /// The streak grows when the previous completion was yesterday or there was
    /// none, holds on the same day, and restarts at 1 after a gap.
    pub fn record_win(&mut self, guesses: usize, days_since_last_completion: Option<i64>) {
        self.games_played += 1;
        self.current_streak = match days_since_last_completion {
            None | Some(1) => self.current_streak + 1,
            Some(0) => self.current_streak,
            Some(_) => 1,
        };
        if let Some(slot) = guesses.checked_sub(1).and_then(|i| self.guesses.wins.get_mut(i)) {
            *slot += 1;
        }
        self.games_won += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        self.recompute();
    }

    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
        self.guesses.fail += 1;
        self.recompute();
    }

    /// Apply the missed-day rule when a new day's board is created
    ///
    /// The streak is lost if the previous game was left unfinished, or if it is
    /// older than yesterday.
    pub fn reconcile_new_day(&mut self, previous_status: GameStatus, days_since_previous_game: i64) {
        if days_since_previous_game < 1 {
            return;
        }
        if previous_status == GameStatus::InProgress || days_since_previous_game > 1 {
            self.current_streak = 0;
        }
    }

    /// Replace these statistics with imported ones
    pub fn import(&mut self, imported: &ImportStats) {
        *self = Self {
            current_streak: imported.current_streak,
            max_streak: imported.max_streak,
            guesses: imported.guesses,
            win_percentage: 0,
            games_played: imported.games_played,
            games_won: imported.guesses.total_wins(),
            average_guesses: 0,
        };
        self.recompute();
        if let Some(win_percentage) = imported.win_percentage {
            self.win_percentage = win_percentage;
        }
    }

    fn recompute(&mut self) {
        self.win_percentage = if self.games_played > 0 {
            round_half_even(f64::from(self.games_won) / f64::from(self.games_played) * 100.0)
        } else {
            0
        };
        self.average_guesses = if self.games_won > 0 {
            round_half_even(self.guesses.total_guesses() as f64 / f64::from(self.games_won))
        } else {
            0
        };
    }
}

/// Whole UTC days from `earlier_ms` to `later_ms`
#[must_use]
pub fn days_between(earlier_ms: i64, later_ms: i64) -> i64 {
    later_ms.div_euclid(MS_PER_DAY) - earlier_ms.div_euclid(MS_PER_DAY)
}

fn round_half_even(value: f64) -> u32 {
    value.round_ties_even() as u32
}
