//! Property tests for the engine's invariants.
//!
//! The engine must hold its invariants under *any* sequence of operations,
//! not just well-behaved view layers, so these drive it with arbitrary
//! operation streams.

use proptest::prelude::*;

use pattern_recall::{Difficulty, EngineConfig, GameEngine, Symbol};

/// One externally observable operation.
#[derive(Clone, Debug)]
enum Op {
    Start,
    Input(Symbol),
    Tick,
    Reset,
    ChangeDifficulty(Difficulty),
    Advance,
}

fn symbol_strategy() -> impl Strategy<Value = Symbol> {
    (0..Symbol::COUNT).prop_map(|i| Symbol::ALL[i])
}

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    (0..Difficulty::ALL.len()).prop_map(|i| Difficulty::ALL[i])
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Start),
        symbol_strategy().prop_map(Op::Input),
        Just(Op::Tick),
        Just(Op::Reset),
        difficulty_strategy().prop_map(Op::ChangeDifficulty),
        Just(Op::Advance),
    ]
}

fn apply(engine: &mut GameEngine, op: &Op) {
    match op {
        Op::Start => engine.start_new_round(),
        Op::Input(symbol) => engine.handle_symbol_input(*symbol),
        Op::Tick => engine.tick(),
        Op::Reset => engine.reset_game(),
        Op::ChangeDifficulty(level) => engine.change_difficulty(*level),
        Op::Advance => engine.advance(),
    }
}

proptest! {
    #[test]
    fn pattern_length_always_in_bounds(round in 1u32..1000, difficulty in difficulty_strategy()) {
        let config = EngineConfig::default();
        let len = config.pattern_length(round, difficulty);
        prop_assert!((2..=10).contains(&len));
    }

    #[test]
    fn pattern_length_matches_formula(round in 1u32..1000, difficulty in difficulty_strategy()) {
        let config = EngineConfig::default();
        let base = (2 + round / 3) as f64;
        let expected = ((base * difficulty.multiplier()).floor() as usize).min(10);
        prop_assert_eq!(config.pattern_length(round, difficulty), expected);
    }

    #[test]
    fn invariants_hold_under_arbitrary_operations(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut engine = GameEngine::with_seed(EngineConfig::default(), seed);
        let mut last_high_score = 0u32;

        for op in &ops {
            apply(&mut engine, op);
            let state = engine.state();

            // High score is monotone
            prop_assert!(state.high_score >= last_high_score);
            last_high_score = state.high_score;

            // Player input never outruns the pattern
            prop_assert!(state.player_pattern.len() <= state.current_pattern.len());

            // While input is live, progress so far is an exact prefix
            if state.game_started {
                let matched = state
                    .player_pattern
                    .iter()
                    .zip(state.current_pattern.iter())
                    .all(|(a, b)| a == b);
                prop_assert!(matched);
            }

            // Generated patterns stay in bounds
            if !state.current_pattern.is_empty() {
                prop_assert!((2..=10).contains(&state.current_pattern.len()));
            }

            // Countdown never exceeds the reveal window
            prop_assert!(state.countdown <= engine.config().reveal_seconds);

            // The ticker only runs during the reveal phase
            if engine.ticker().is_running() {
                prop_assert!(state.game_started);
            }
        }
    }

    #[test]
    fn round_increments_exactly_on_wins(
        seed in any::<u64>(),
        rounds in 1usize..12,
    ) {
        let mut engine = GameEngine::with_seed(EngineConfig::default(), seed);

        for expected_round in 1..=rounds {
            prop_assert_eq!(engine.state().round as usize, expected_round);
            engine.start_new_round();

            let pattern: Vec<Symbol> = engine.state().current_pattern.to_vec();
            for symbol in pattern {
                engine.handle_symbol_input(symbol);
            }

            prop_assert_eq!(engine.state().is_correct, Some(true));
            prop_assert_eq!(engine.state().round as usize, expected_round + 1);
        }
    }

    #[test]
    fn reset_is_idempotent_after_any_history(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..50),
    ) {
        let mut engine = GameEngine::with_seed(EngineConfig::default(), seed);
        for op in &ops {
            apply(&mut engine, op);
        }

        engine.reset_game();
        let once = engine.state().clone();
        engine.reset_game();

        prop_assert_eq!(engine.state(), &once);
        prop_assert_eq!(once.score, 0);
        prop_assert_eq!(once.round, 1);
    }

    #[test]
    fn failure_is_immediate_regardless_of_prefix(
        seed in any::<u64>(),
        correct_inputs in 0usize..10,
    ) {
        let mut engine = GameEngine::with_seed(EngineConfig::default(), seed);
        engine.start_new_round();

        let pattern: Vec<Symbol> = engine.state().current_pattern.to_vec();
        let prefix_len = correct_inputs.min(pattern.len() - 1);

        for &symbol in &pattern[..prefix_len] {
            engine.handle_symbol_input(symbol);
        }
        prop_assert!(engine.state().game_started);

        // One mismatch ends the round, no matter how much was correct
        let target = pattern[prefix_len];
        let wrong = Symbol::ALL
            .into_iter()
            .find(|&s| s != target)
            .expect("six-symbol alphabet");
        engine.handle_symbol_input(wrong);

        prop_assert_eq!(engine.state().is_correct, Some(false));
        prop_assert!(!engine.state().game_started);
        prop_assert!(engine.state().show_pattern);
    }
}
