//! State-change notifications for the view layer.
//!
//! Every engine operation that changes state pushes events into an internal
//! queue; the view layer drains it via [`crate::GameEngine::drain_events`]
//! and redraws what changed. This replaces implicit re-render triggers with
//! explicit notifications while keeping the renderer free to also pull the
//! full [`crate::GameState`] each frame.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// A notification emitted by an engine operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round began; the pattern is visible and the countdown started.
    RoundStarted {
        /// Length of the generated pattern.
        pattern_length: usize,
    },

    /// One second of the reveal phase elapsed.
    CountdownTicked {
        /// Seconds left before the pattern is hidden.
        remaining: u8,
    },

    /// The reveal countdown expired and the pattern was hidden.
    PatternHidden,

    /// A correct symbol was entered; the round continues.
    SymbolAccepted {
        /// Zero-based position the symbol filled.
        position: usize,
    },

    /// The full pattern was reproduced correctly.
    RoundWon {
        /// Points awarded for this round.
        points: u32,
        /// The round number now awaiting its pattern.
        round: u32,
    },

    /// A mismatched symbol ended the round.
    RoundLost {
        /// Score at the moment of failure.
        final_score: u32,
        /// True if this run set a new session high score.
        new_high_score: bool,
    },

    /// The difficulty changed (always accompanied by a reset).
    DifficultyChanged {
        /// The newly active level.
        difficulty: Difficulty,
    },

    /// Score and round were reset.
    GameReset,
}
