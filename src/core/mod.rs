//! Core engine types: symbols, difficulty, state, RNG, configuration.
//!
//! These are the fundamental building blocks the engine operates on. Hosts
//! tune gameplay via [`EngineConfig`] rather than modifying the core.

pub mod config;
pub mod difficulty;
pub mod rng;
pub mod state;
pub mod symbol;

pub use config::EngineConfig;
pub use difficulty::Difficulty;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, RoundPhase};
pub use symbol::Symbol;
