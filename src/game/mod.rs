//! Game flow around the core rules
//!
//! State is always passed in and returned; nothing here is global.

mod practice;
mod session;
mod share;
mod state;
mod stats;

pub use practice::{Practice, PracticeError, SolutionSource};
pub use session::{Completion, Game, GuessError, Submission};
pub use share::{GAME_NAME, share_text, win_message};
pub use state::{GameState, GameStatus, MAX_GUESSES};
pub use stats::{GuessDistribution, ImportStats, Statistics, days_between};
