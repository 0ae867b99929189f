//! # pattern-recall
//!
//! A round-based symbol-memory game engine.
//!
//! The player watches a randomly generated sequence of symbols, the sequence
//! is hidden after a short countdown, and the player must reproduce it by
//! selecting symbols in the same order. Rounds get longer as the player
//! progresses, scaled by a selectable difficulty.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machine**: The engine owns a single [`GameState`] and
//!    mutates it only through its own operations. Every input produces a
//!    defined next state; there are no error paths in the domain.
//!
//! 2. **Renderer-Agnostic**: The engine knows nothing about layout, colors,
//!    or the host platform. A view layer reads state, drains events, and
//!    forwards player input.
//!
//! 3. **Explicit Time**: The reveal countdown is driven by an explicit
//!    [`CountdownTicker`] with start/stop controls. The host scheduler calls
//!    [`GameEngine::tick`] once per second while the ticker runs; no UI timer
//!    primitive leaks into the engine.
//!
//! 4. **Deterministic**: Pattern generation uses a seedable ChaCha8 RNG.
//!    Same seed, same session.
//!
//! ## Modules
//!
//! - `core`: Symbols, difficulty scaling, state, RNG, configuration
//! - `engine`: The game engine and its countdown ticker
//! - `events`: State-change notifications for the view layer

pub mod core;
pub mod engine;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, EngineConfig, GameRng, GameRngState, GameState, RoundPhase, Symbol,
};

pub use crate::engine::{CountdownTicker, GameEngine};

pub use crate::events::GameEvent;
