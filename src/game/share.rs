//! Shareable result text and end-of-game messages

use super::{GameState, GameStatus, MAX_GUESSES};
use std::fmt::Write;

/// Title used in shared results
pub const GAME_NAME: &str = "Wordull";

const WIN_MESSAGES: [&str; MAX_GUESSES] =
    ["Genius", "Magnificent", "Impressive", "Splendid", "Great", "Phew"];

/// Message shown after winning in `guess_count` guesses
#[must_use]
pub fn win_message(guess_count: usize) -> &'static str {
    guess_count
        .checked_sub(1)
        .and_then(|i| WIN_MESSAGES.get(i))
        .copied()
        .unwrap_or("Phew")
}

/// Spoiler-free summary of a game
///
/// ```text
/// Wordull 3/6*
///
/// ⬛🟨⬛⬛⬛
/// 🟩⬛🟨⬛⬛
/// 🟩🟩🟩🟩🟩
/// ```
///
/// The score is `X` unless the game was won; `*` marks hard mode.
#[must_use]
pub fn share_text(state: &GameState) -> String {
    let score = if state.status == GameStatus::Win {
        state.row_index.to_string()
    } else {
        "X".to_string()
    };
    let hard = if state.hard_mode { "*" } else { "" };

    let mut text = format!("{GAME_NAME} {score}/{MAX_GUESSES}{hard}\n\n");
    for evaluation in state.evaluations.iter().take(state.row_index).flatten() {
        let _ = writeln!(text, "{}", evaluation.to_tiles());
    }
    text
}
