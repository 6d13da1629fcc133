//! Property-based tests for scoreboard invariants across arbitrary
//! operation sequences.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::domain::roster::{add_player, remove_player, reset_game};
use crate::domain::rules::WinThreshold;
use crate::domain::scoring::{add_score, reset_scores, set_threshold};
use crate::domain::state::GameState;
use crate::domain::test_prelude;

const NAMES: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];

#[derive(Debug, Clone)]
enum Op {
    AddPlayer(usize),
    AddScore(usize, i64),
    SetThreshold(i64),
    ResetGame,
    ResetScores,
    RemovePlayer(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..NAMES.len()).prop_map(Op::AddPlayer),
        6 => ((0..NAMES.len()), -50i64..150).prop_map(|(i, s)| Op::AddScore(i, s)),
        1 => (1i64..400).prop_map(Op::SetThreshold),
        1 => Just(Op::ResetGame),
        1 => Just(Op::ResetScores),
        1 => (0..NAMES.len()).prop_map(Op::RemovePlayer),
    ]
}

/// Apply an op, keeping a shadow record of successful round scores.
fn apply(state: &mut GameState, history: &mut HashMap<String, Vec<i64>>, op: &Op) {
    match *op {
        Op::AddPlayer(i) => {
            if add_player(state, NAMES[i]).is_ok() {
                history.insert(NAMES[i].to_string(), Vec::new());
            }
        }
        Op::AddScore(i, score) => {
            if add_score(state, NAMES[i], score).is_ok() {
                history.entry(NAMES[i].to_string()).or_default().push(score);
            }
        }
        Op::SetThreshold(t) => {
            set_threshold(state, WinThreshold::new(t).unwrap());
        }
        Op::ResetGame => {
            reset_game(state);
            history.clear();
        }
        Op::ResetScores => {
            reset_scores(state);
            history.values_mut().for_each(Vec::clear);
        }
        Op::RemovePlayer(i) => {
            if remove_player(state, NAMES[i]).is_ok() {
                history.remove(NAMES[i]);
            }
        }
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: score equals the sum of rounds, and rounds has one entry per
    /// successful AddScore since the last reset.
    #[test]
    fn prop_score_is_sum_of_rounds(ops in prop::collection::vec(op(), 0..60)) {
        let mut state = GameState::new();
        let mut history = HashMap::new();

        for op in &ops {
            apply(&mut state, &mut history, op);

            for (name, player) in state.players.iter() {
                prop_assert_eq!(player.score, player.rounds.iter().sum::<i64>());
                prop_assert_eq!(Some(&player.rounds), history.get(name));
            }
            prop_assert_eq!(state.players.len(), history.len());
        }
    }

    /// Property: game_over iff winner is set, and a winner is always on the roster.
    #[test]
    fn prop_winner_consistency(ops in prop::collection::vec(op(), 0..60)) {
        let mut state = GameState::new();
        let mut history = HashMap::new();

        for op in &ops {
            apply(&mut state, &mut history, op);

            prop_assert_eq!(state.game_over(), state.winner.is_some());
            if let Some(winner) = &state.winner {
                prop_assert!(state.players.contains(winner), "winner {} not on roster", winner);
            }
        }
    }

    /// Property: once declared, AddScore for anyone never changes the winner.
    #[test]
    fn prop_winner_sticky_under_add_score(
        setup in prop::collection::vec(op(), 0..40),
        scores in prop::collection::vec(((0..NAMES.len()), -50i64..300), 1..20),
    ) {
        let mut state = GameState::new();
        let mut history = HashMap::new();
        for op in &setup {
            apply(&mut state, &mut history, op);
        }

        let before = state.winner.clone();
        for (i, score) in scores {
            apply(&mut state, &mut history, &Op::AddScore(i, score));
            if before.is_some() {
                prop_assert_eq!(&state.winner, &before);
            }
        }
    }

    /// Property: after a threshold change the winner is exactly the first
    /// qualifying player in roster order.
    #[test]
    fn prop_set_threshold_picks_first_match(
        setup in prop::collection::vec(op(), 0..40),
        t in 1i64..400,
    ) {
        let mut state = GameState::new();
        let mut history = HashMap::new();
        for op in &setup {
            apply(&mut state, &mut history, op);
        }

        set_threshold(&mut state, WinThreshold::new(t).unwrap());

        let expected = state
            .players
            .iter()
            .find(|(_, p)| p.score >= t)
            .map(|(n, _)| n.to_string());
        prop_assert_eq!(state.winner, expected);
    }
}
