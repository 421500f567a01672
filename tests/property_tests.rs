//! Property tests for turn resolution and first-player selection.

use proptest::prelude::*;

use dice36::core::{normalize_name, PlayerId, TurnQueue, CEILING};
use dice36::rules::{GameEngine, RollOutcome, TieBreak, TieBreakStep};

const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

/// A locked engine mid-game: total below the ceiling, a non-empty queue
/// made of a rotation of some roster ids.
fn mid_game() -> impl Strategy<Value = (u32, Vec<u8>)> {
    (0..CEILING, proptest::sample::subsequence((1..=6u8).collect::<Vec<_>>(), 1..=6), 0..6usize)
        .prop_map(|(total, mut queue, shift)| {
            let len = queue.len();
            queue.rotate_left(shift % len);
            (total, queue)
        })
}

fn engine_at(total: u32, queue: &[u8]) -> GameEngine {
    let mut engine = GameEngine::new();
    engine.register_players(NAMES).unwrap();
    engine.state_mut().total_score = total;
    engine.state_mut().queue = queue.iter().copied().map(PlayerId::new).collect();
    engine
}

proptest! {
    #[test]
    fn roll_resolution_respects_ceiling((total, queue) in mid_game(), roll in 1..=6u8) {
        let mut engine = engine_at(total, &queue);
        let before: Vec<PlayerId> = engine.state().queue.to_vec();
        let turn = engine.resolve_roll(roll).unwrap();
        let state = engine.state();
        let candidate = total + u32::from(roll);

        prop_assert_eq!(turn.player, before[0]);
        prop_assert!(state.total_score <= CEILING);

        match turn.outcome {
            RollOutcome::Safe => {
                prop_assert!(candidate < CEILING);
                prop_assert_eq!(state.total_score, candidate);
                prop_assert_eq!(state.queue.len(), before.len());
                let mut rotated = before.clone();
                rotated.rotate_left(1);
                prop_assert_eq!(state.queue.to_vec(), rotated);
            }
            RollOutcome::Eliminated => {
                prop_assert!(candidate > CEILING);
                prop_assert_eq!(state.total_score, total);
                prop_assert_eq!(state.queue.to_vec(), before[1..].to_vec());
            }
            RollOutcome::Lost => {
                prop_assert!(candidate > CEILING);
                prop_assert_eq!(before.len(), 1);
                prop_assert_eq!(state.total_score, 0);
                prop_assert!(state.queue.is_empty());
                prop_assert!(!state.enabled);
            }
            RollOutcome::Won => {
                prop_assert_eq!(candidate, CEILING);
                prop_assert_eq!(state.total_score, CEILING);
                prop_assert_eq!(state.winner, Some(before[0]));
                prop_assert!(state.queue.is_empty());
                prop_assert!(!state.enabled);
            }
        }
    }

    #[test]
    fn tie_break_keeps_exactly_the_leaders(rolls in proptest::collection::vec(1..=6u8, 6)) {
        let mut tie_break = TieBreak::new(PlayerId::all());
        let max = *rolls.iter().max().unwrap();
        let leaders: Vec<PlayerId> = PlayerId::all()
            .zip(&rolls)
            .filter(|&(_, &r)| r == max)
            .map(|(id, _)| id)
            .collect();

        match tie_break.submit_round(&rolls) {
            TieBreakStep::Decided { player, roll } => {
                prop_assert_eq!(leaders, vec![player]);
                prop_assert_eq!(roll, max);
            }
            TieBreakStep::Tied { candidates, roll } => {
                prop_assert!(leaders.len() > 1);
                prop_assert_eq!(candidates.to_vec(), leaders.clone());
                prop_assert_eq!(tie_break.candidates(), leaders.as_slice());
                prop_assert_eq!(roll, max);
            }
        }
    }

    #[test]
    fn queue_rotation_preserves_order(first in 1..=6u8) {
        let queue = TurnQueue::starting_at(PlayerId::all(), PlayerId::new(first)).unwrap();
        let order = queue.to_vec();

        prop_assert_eq!(order.len(), 6);
        prop_assert_eq!(order[0], PlayerId::new(first));
        for pair in order.windows(2) {
            prop_assert_eq!(pair[1].0, pair[0].0 % 6 + 1);
        }
    }

    #[test]
    fn names_are_never_blank(raw in ".{0,12}", position in 1..=6usize) {
        let name = normalize_name(&raw, position);

        prop_assert!(!name.trim().is_empty());
        if raw.trim().is_empty() {
            prop_assert_eq!(name, format!("Player {}", position));
        }
    }
}
