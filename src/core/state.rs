//! Game state: the single mutable aggregate the engine owns.
//!
//! ## GameState
//!
//! Everything the renderer needs to draw a frame:
//! - Score, high score, round, difficulty
//! - The target pattern and the player's progress through it
//! - Phase flags (`game_started`, `show_pattern`), reveal countdown
//! - Last round outcome and the feedback banner
//!
//! The state is created once per session and reinitialized per round by the
//! engine's operations; the renderer reads it, never writes it.
//!
//! ## Invariants
//!
//! While `game_started` is true, `player_pattern` is a prefix of
//! `current_pattern` (the engine ends the round on the first mismatch).
//! `player_pattern.len() <= current_pattern.len()` always. `high_score` is
//! monotonically non-decreasing and survives resets.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::difficulty::Difficulty;
use super::symbol::Symbol;

/// A symbol sequence. Patterns never exceed 10 symbols, so the buffer stays
/// inline.
pub type Pattern = SmallVec<[Symbol; 10]>;

/// Position in the per-round state machine, derived from the flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round active; waiting for the player to start.
    Idle,
    /// Pattern visible, countdown ticking.
    Revealing,
    /// Pattern hidden, awaiting player input.
    Guessing,
    /// Round completed correctly; pattern shown again.
    Won,
    /// Round failed; pattern shown again for comparison.
    Lost,
}

/// The full game state, observable by the renderer each frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Progression ===
    /// Accumulated points. Reset on game reset.
    pub score: u32,

    /// Best score this session. Never reset.
    pub high_score: u32,

    /// Current round, starting at 1. Increments only on a won round.
    pub round: u32,

    /// Active difficulty level.
    pub difficulty: Difficulty,

    // === Round Data ===
    /// Target sequence for the active round. Empty when no round is active.
    pub current_pattern: Pattern,

    /// Symbols the player has selected so far this round.
    pub player_pattern: Pattern,

    // === Phase Flags ===
    /// True while the player is expected to provide input.
    pub game_started: bool,

    /// True while the pattern is visible (reveal phase or after a round ends).
    pub show_pattern: bool,

    /// Seconds remaining in the reveal phase.
    pub countdown: u8,

    /// Outcome of the last completed round. `None` before any round ends.
    pub is_correct: Option<bool>,

    /// Human-readable status banner.
    pub feedback: String,
}

impl GameState {
    /// Create the session-start state.
    ///
    /// ## Defaults
    ///
    /// - `score`: 0, `high_score`: 0, `round`: 1
    /// - `difficulty`: Normal
    /// - No pattern, no input, no outcome
    /// - `show_pattern`: true, `countdown`: `reveal_seconds`
    #[must_use]
    pub fn new(reveal_seconds: u8) -> Self {
        Self {
            score: 0,
            high_score: 0,
            round: 1,
            difficulty: Difficulty::default(),
            current_pattern: Pattern::new(),
            player_pattern: Pattern::new(),
            game_started: false,
            show_pattern: true,
            countdown: reveal_seconds,
            is_correct: None,
            feedback: String::new(),
        }
    }

    /// The derived state-machine position.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.game_started {
            if self.show_pattern {
                RoundPhase::Revealing
            } else {
                RoundPhase::Guessing
            }
        } else {
            match self.is_correct {
                Some(true) => RoundPhase::Won,
                Some(false) => RoundPhase::Lost,
                None => RoundPhase::Idle,
            }
        }
    }

    /// True if a round has been generated and not yet reset away.
    #[must_use]
    pub fn round_active(&self) -> bool {
        !self.current_pattern.is_empty()
    }

    /// How many symbols the player still has to enter this round.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.current_pattern
            .len()
            .saturating_sub(self.player_pattern.len())
    }
}
