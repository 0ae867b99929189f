//! The game engine: a round-based state machine.
//!
//! The engine owns the [`GameState`] exclusively and mutates it only through
//! its operations. The view layer forwards player input (symbol presses,
//! difficulty selection, start/reset), delivers timer ticks while the
//! countdown ticker runs, and reads state back to draw each frame.
//!
//! ## Per-Round State Machine
//!
//! ```text
//! Idle -> Revealing -> Guessing -> Won | Lost -> Idle
//!          (ticking)    (input)    (pattern shown again)
//! ```
//!
//! Every transition is deterministic given current state and input; no
//! operation can fail.

pub mod ticker;

pub use ticker::CountdownTicker;

use crate::core::{Difficulty, EngineConfig, GameRng, GameState, Symbol};
use crate::events::GameEvent;

/// The game engine.
///
/// ## Example
///
/// ```
/// use pattern_recall::{GameEngine, RoundPhase};
///
/// let mut engine = GameEngine::with_seed(Default::default(), 42);
/// engine.start_new_round();
///
/// assert_eq!(engine.state().phase(), RoundPhase::Revealing);
/// assert!(engine.ticker().is_running());
///
/// // Host delivers one tick per second; the fourth tick hides the pattern.
/// for _ in 0..4 {
///     engine.tick();
/// }
/// assert_eq!(engine.state().phase(), RoundPhase::Guessing);
/// ```
pub struct GameEngine {
    config: EngineConfig,
    state: GameState,
    rng: GameRng,
    ticker: CountdownTicker,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create an engine seeded from the operating system.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = GameRng::from_entropy();
        Self::with_rng(config, rng)
    }

    /// Create an engine with a fixed seed (reproducible sessions).
    #[must_use]
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    fn with_rng(config: EngineConfig, rng: GameRng) -> Self {
        let state = GameState::new(config.reveal_seconds);
        Self {
            config,
            state,
            rng,
            ticker: CountdownTicker::new(),
            events: Vec::new(),
        }
    }

    // === Render Pull ===

    /// The full game state, for the renderer to read each frame.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The countdown ticker. While running, the host scheduler must call
    /// [`GameEngine::tick`] once per second.
    #[must_use]
    pub fn ticker(&self) -> &CountdownTicker {
        &self.ticker
    }

    /// Drain all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Operations ===

    /// Generate and reveal the pattern for the current round.
    ///
    /// Pattern length is `min(floor((base + round/step) × multiplier), cap)`,
    /// always in `[2, 10]` with default configuration. Starts the countdown
    /// ticker (idempotently).
    pub fn start_new_round(&mut self) {
        let length = self
            .config
            .pattern_length(self.state.round, self.state.difficulty);

        self.state.current_pattern.clear();
        for _ in 0..length {
            self.state.current_pattern.push(self.rng.sample_symbol());
        }

        self.state.player_pattern.clear();
        self.state.game_started = true;
        self.state.show_pattern = true;
        self.state.countdown = self.config.reveal_seconds;
        self.state.is_correct = None;
        self.state.feedback = format!(
            "Watch the pattern! It will disappear in {} seconds! ({} mode)",
            self.config.reveal_seconds,
            self.state.difficulty.label()
        );

        self.ticker.start();
        self.events.push(GameEvent::RoundStarted {
            pattern_length: length,
        });
    }

    /// Reset score and round, abandoning any round in progress.
    ///
    /// The high score is NOT touched. Idempotent: a second reset yields the
    /// same state.
    pub fn reset_game(&mut self) {
        self.state.score = 0;
        self.state.round = 1;
        self.state.current_pattern.clear();
        self.state.player_pattern.clear();
        self.state.game_started = false;
        self.state.show_pattern = true;
        self.state.countdown = self.config.reveal_seconds;
        self.state.is_correct = None;
        self.state.feedback.clear();

        self.ticker.stop();
        self.events.push(GameEvent::GameReset);
    }

    /// Process one symbol selection from the player.
    ///
    /// Ignored silently while no round is awaiting input. A mismatch at the
    /// just-filled position ends the round as a loss; filling the whole
    /// pattern correctly ends it as a win; anything else leaves the round
    /// awaiting the next symbol.
    pub fn handle_symbol_input(&mut self, symbol: Symbol) {
        if !self.state.game_started {
            return;
        }

        let position = self.state.player_pattern.len();
        self.state.player_pattern.push(symbol);

        // game_started guarantees a generated pattern longer than the input
        // so far, so the index is in bounds.
        if symbol != self.state.current_pattern[position] {
            self.fail_round();
            return;
        }

        if self.state.player_pattern.len() == self.state.current_pattern.len() {
            self.win_round();
            return;
        }

        self.events.push(GameEvent::SymbolAccepted { position });
    }

    /// Switch difficulty. Always abandons the round in progress and resets
    /// score and round; the high score survives.
    pub fn change_difficulty(&mut self, level: Difficulty) {
        self.state.difficulty = level;
        self.reset_game();
        // Set after the reset so the difficulty message is what the player
        // sees.
        self.state.feedback = format!("Difficulty changed to {}", level.label());
        self.events.push(GameEvent::DifficultyChanged { difficulty: level });
    }

    /// Start the next round or retry after a loss, whichever the last
    /// outcome calls for.
    ///
    /// Convenience for the single Start/Next-Round/Try-Again control: a lost
    /// round resets the game, anything else starts a new round.
    pub fn advance(&mut self) {
        match self.state.is_correct {
            Some(false) => self.reset_game(),
            _ => self.start_new_round(),
        }
    }

    /// Deliver one second of elapsed time.
    ///
    /// No-op unless the ticker is running. Decrements the countdown; once it
    /// has reached zero, hides the pattern and stops the ticker.
    pub fn tick(&mut self) {
        if !self.ticker.is_running() {
            return;
        }

        if self.state.countdown > 0 {
            self.state.countdown -= 1;
            self.events.push(GameEvent::CountdownTicked {
                remaining: self.state.countdown,
            });
        } else {
            self.state.show_pattern = false;
            self.ticker.stop();
            self.events.push(GameEvent::PatternHidden);
        }
    }

    // === Terminal Transitions ===

    fn win_round(&mut self) {
        let points = self
            .state
            .difficulty
            .scale(self.state.current_pattern.len() as u32);

        self.state.score += points;
        self.state.round += 1;
        self.state.is_correct = Some(true);
        self.state.game_started = false;
        self.state.show_pattern = true;
        self.state.feedback = "Correct! Click Next Round to continue!".to_string();

        // The round can end while the reveal is still counting; the answer
        // must stay visible.
        self.ticker.stop();
        self.events.push(GameEvent::RoundWon {
            points,
            round: self.state.round,
        });
    }

    fn fail_round(&mut self) {
        let final_score = self.state.score;
        let new_high_score = final_score > self.state.high_score;

        if new_high_score {
            self.state.high_score = final_score;
            self.state.feedback = format!("New High Score! {final_score} points!");
        } else {
            self.state.feedback = format!("Game Over! Final Score: {final_score}");
        }

        self.state.is_correct = Some(false);
        self.state.game_started = false;
        self.state.show_pattern = true;

        self.ticker.stop();
        self.events.push(GameEvent::RoundLost {
            final_score,
            new_high_score,
        });
    }
}
