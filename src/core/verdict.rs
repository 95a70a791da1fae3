//! Per-letter verdicts

use serde::{Deserialize, Serialize};

/// Result of scoring one letter of a guess
///
/// Ordering follows priority, so `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Letter is not usable at this position given the remaining counts
    Absent,
    /// Right letter, wrong position
    Present,
    /// Right letter, right position
    Correct,
}

impl Verdict {
    /// Keyboard-colouring priority: correct 3, present 2, absent 1
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
        }
    }

    /// Tile used in shared results
    #[must_use]
    pub const fn tile(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `G`/🟩 for correct, `Y`/🟨 for present and `-`/`_`/`X`/⬛/⬜ for absent.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}
