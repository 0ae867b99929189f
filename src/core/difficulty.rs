//! Difficulty levels and their scaling multiplier.
//!
//! Difficulty scales both pattern length and scoring:
//! easy ×1, normal ×1.5, hard ×2. The multiplier is stored in halves so that
//! `floor(n × multiplier)` is exact integer arithmetic.

use serde::{Deserialize, Serialize};

/// Selectable difficulty level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// All levels, in ascending order of multiplier.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// The scaling multiplier as a float (1.0 / 1.5 / 2.0).
    ///
    /// For display only; state transitions use [`Difficulty::scale`].
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Normal => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    /// The multiplier expressed in halves (2 / 3 / 4).
    #[must_use]
    const fn multiplier_halves(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Normal => 3,
            Difficulty::Hard => 4,
        }
    }

    /// `floor(value × multiplier)` in exact integer arithmetic.
    ///
    /// Used for both pattern length and points awarded on a won round.
    #[must_use]
    pub const fn scale(self, value: u32) -> u32 {
        value * self.multiplier_halves() / 2
    }

    /// Uppercase label for feedback messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
