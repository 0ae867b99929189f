//! Engine configuration.
//!
//! Gameplay parameters are configuration, not convention. The defaults
//! reproduce the classic game exactly: a 3-second reveal, patterns from 2 to
//! 10 symbols, one extra base symbol every 3 rounds.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Engine configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seconds the pattern stays visible before being hidden (default: 3).
    pub reveal_seconds: u8,

    /// Hard cap on pattern length (default: 10).
    pub max_pattern_length: usize,

    /// Pattern length at round 1 before difficulty scaling (default: 2).
    pub base_length: u32,

    /// Rounds between base-length increments (default: 3).
    pub rounds_per_step: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reveal_seconds: 3,
            max_pattern_length: 10,
            base_length: 2,
            rounds_per_step: 3,
        }
    }
}

impl EngineConfig {
    /// Create a config with a custom reveal duration.
    #[must_use]
    pub fn with_reveal_seconds(mut self, seconds: u8) -> Self {
        self.reveal_seconds = seconds;
        self
    }

    /// Create a config with a custom pattern length cap.
    #[must_use]
    pub fn with_max_pattern_length(mut self, max: usize) -> Self {
        assert!(max > 0, "Pattern length cap must be positive");
        self.max_pattern_length = max;
        self
    }

    /// Create a config with a custom base length.
    #[must_use]
    pub fn with_base_length(mut self, base: u32) -> Self {
        assert!(base > 0, "Base length must be positive");
        self.base_length = base;
        self
    }

    /// Create a config with a custom round step.
    #[must_use]
    pub fn with_rounds_per_step(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Rounds per step must be positive");
        self.rounds_per_step = rounds;
        self
    }

    /// Pattern length for a given round and difficulty:
    /// `min(floor((base + round/step) × multiplier), cap)`.
    ///
    /// With default parameters the result is always in `[2, 10]`.
    #[must_use]
    pub fn pattern_length(&self, round: u32, difficulty: Difficulty) -> usize {
        let base = self.base_length + round / self.rounds_per_step;
        (difficulty.scale(base) as usize).min(self.max_pattern_length)
    }
}
