//! Property tests for the shootout state machine.
//!
//! Random command sequences with random outcome scripts are folded through
//! `ShootoutRules`; every reachable state must satisfy the state
//! invariants, and each command must have exactly its documented effect.

use proptest::prelude::*;

use penalty_shootout::core::{Command, GameState, Outcome, Phase, ScriptedOutcomes};
use penalty_shootout::rules::ShootoutRules;

fn outcome() -> impl Strategy<Value = Outcome> {
    any::<bool>().prop_map(Outcome::from_bool)
}

fn command() -> impl Strategy<Value = Command> {
    // Resets are rarer so that games actually reach the end.
    prop_oneof![
        4 => Just(Command::PlayerTurn),
        4 => Just(Command::OpponentTurn),
        1 => Just(Command::Reset),
    ]
}

fn script() -> impl Strategy<Value = ScriptedOutcomes> {
    prop::collection::vec(outcome(), 1..16)
        .prop_map(|outcomes| ScriptedOutcomes::new(outcomes).unwrap())
}

/// Fold a command sequence, returning every state visited (initial included).
fn run(rules: &ShootoutRules, commands: &[Command], source: &mut ScriptedOutcomes) -> Vec<GameState> {
    let mut states = vec![rules.initial_state()];
    let mut state = rules.initial_state();
    for &command in commands {
        state = rules.apply(&state, command, source);
        states.push(state);
    }
    states
}

fn assert_invariants(rules: &ShootoutRules, state: &GameState) {
    let limit = rules.round_limit();
    assert!((1..=limit + 1).contains(&state.current_round));
    assert_eq!(state.phase == Phase::Ended, state.current_round > limit);
    if state.awaiting_opponent_turn {
        assert_eq!(state.phase, Phase::Playing);
    }
    // A side scores at most once per round it has shot in.
    assert!(state.player_score < state.current_round + u32::from(state.awaiting_opponent_turn));
    assert!(state.opponent_score < state.current_round);
}

proptest! {
    #[test]
    fn prop_reachable_states_hold_invariants(
        commands in prop::collection::vec(command(), 0..64),
        mut source in script(),
        limit in 1u32..8,
    ) {
        let rules = ShootoutRules::new(limit);
        for state in run(&rules, &commands, &mut source) {
            assert_invariants(&rules, &state);
        }
    }

    #[test]
    fn prop_player_turn_effect(
        commands in prop::collection::vec(command(), 0..32),
        mut source in script(),
        drawn in outcome(),
    ) {
        let rules = ShootoutRules::default();
        let states = run(&rules, &commands, &mut source);
        let before = *states.last().unwrap();
        prop_assume!(before.phase == Phase::Playing && !before.awaiting_opponent_turn);

        let after = rules.resolve_player_turn(&before, drawn);

        prop_assert_eq!(after.player_score, before.player_score + u32::from(drawn.is_success()));
        prop_assert_eq!(after.last_outcome, Some(drawn));
        prop_assert!(after.awaiting_opponent_turn);
        prop_assert_eq!(after.current_round, before.current_round);
        prop_assert_eq!(after.phase, before.phase);
        prop_assert_eq!(after.opponent_score, before.opponent_score);
    }

    #[test]
    fn prop_opponent_turn_effect(
        commands in prop::collection::vec(command(), 0..32),
        mut source in script(),
        drawn in outcome(),
    ) {
        let rules = ShootoutRules::default();
        let mut before = *run(&rules, &commands, &mut source).last().unwrap();
        // Bring the state to the opponent's turn if the game is still on.
        before = rules.apply(&before, Command::PlayerTurn, &mut source);
        prop_assume!(before.awaiting_opponent_turn);

        let after = rules.resolve_opponent_turn(&before, drawn);

        prop_assert!(!after.awaiting_opponent_turn);
        prop_assert_eq!(after.current_round, before.current_round + 1);
        prop_assert_eq!(after.phase == Phase::Ended, after.current_round > 5);
        prop_assert_eq!(after.opponent_score, before.opponent_score + u32::from(drawn.is_success()));
        prop_assert_eq!(after.player_score, before.player_score);
        prop_assert_eq!(after.last_outcome, Some(drawn));
    }

    #[test]
    fn prop_rejected_commands_are_identity(
        commands in prop::collection::vec(command(), 0..48),
        mut source in script(),
    ) {
        let rules = ShootoutRules::default();
        for state in run(&rules, &commands, &mut source) {
            for command in [Command::PlayerTurn, Command::OpponentTurn] {
                if !rules.accepts(&state, command) {
                    let drawn = source.drawn();
                    prop_assert_eq!(rules.apply(&state, command, &mut source), state);
                    prop_assert_eq!(source.drawn(), drawn);
                }
            }
            if state.is_ended() {
                prop_assert!(!rules.accepts(&state, Command::PlayerTurn));
                prop_assert!(!rules.accepts(&state, Command::OpponentTurn));
            }
        }
    }

    #[test]
    fn prop_reset_always_initial(
        commands in prop::collection::vec(command(), 0..48),
        mut source in script(),
    ) {
        let rules = ShootoutRules::default();
        for state in run(&rules, &commands, &mut source) {
            prop_assert_eq!(rules.apply(&state, Command::Reset, &mut source), GameState::INITIAL);
        }
    }

    #[test]
    fn prop_five_cycles_always_end(mut source in script()) {
        let rules = ShootoutRules::default();
        let mut state = rules.initial_state();
        for _ in 0..5 {
            state = rules.apply(&state, Command::PlayerTurn, &mut source);
            state = rules.apply(&state, Command::OpponentTurn, &mut source);
        }
        prop_assert_eq!(state.phase, Phase::Ended);
        prop_assert_eq!(state.current_round, 6);
        prop_assert_eq!(source.drawn(), 10);
    }
}
