//! Game rules derived from the guess history
//!
//! Both functions take the whole history and return a fresh result.

mod hard_mode;
mod keyboard;

pub use hard_mode::{HardModeViolation, ordinal_suffix, validate_hard_mode};
pub use keyboard::{LetterStatusMap, aggregate};
