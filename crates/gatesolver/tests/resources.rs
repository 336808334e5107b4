//! Ownership and duplicate-rejection guarantees.

use std::sync::Arc;

use gatesolver::prelude::*;
use gatesolver::search::{Acceptor, DuplicateStateAcceptor, StateCodec};
use gatesolver::{MoveEngine, SlideMoveEngine};
use gatesolver_test::puzzles::{puzzle, ENCLOSED, OPEN_ROOM, SEALED_GOAL, TWO_GOALS};

const ALL: [StrategyType; 3] = [
    StrategyType::PlainBfs,
    StrategyType::MemoizedBfs,
    StrategyType::IteratedWidth,
];

#[test]
fn test_only_the_solution_survives_a_solve() {
    for strategy in ALL {
        let initial = puzzle(OPEN_ROOM);
        let report = Solver::new(SolverConfig::new().with_strategy(strategy))
            .solve(&initial)
            .unwrap();

        // The caller's state plus the winning state held by the report.
        assert_eq!(Arc::strong_count(initial.reference_grid()), 2, "{strategy}");
        drop(report);
        assert_eq!(Arc::strong_count(initial.reference_grid()), 1, "{strategy}");
    }
}

#[test]
fn test_exhausted_solve_releases_everything() {
    for (map, strategies) in [(ENCLOSED, &ALL[..]), (SEALED_GOAL, &ALL[1..])] {
        for &strategy in strategies {
            let initial = puzzle(map);
            let report = Solver::new(SolverConfig::new().with_strategy(strategy))
                .solve(&initial)
                .unwrap();
            assert!(report.solution.is_none());
            assert_eq!(Arc::strong_count(initial.reference_grid()), 1, "{strategy}");
        }
    }
}

#[test]
fn test_initial_state_is_untouched() {
    let initial = puzzle(TWO_GOALS);
    let before = initial.to_string();
    Solver::new(SolverConfig::default()).solve(&initial).unwrap();
    assert_eq!(initial.to_string(), before);
    assert!(initial.path().is_empty());
}

#[test]
fn test_accepted_states_have_unique_keys() {
    let root = puzzle(OPEN_ROOM);
    let codec = StateCodec::for_state(&root);
    let mut acceptor = DuplicateStateAcceptor::new(codec);
    acceptor.phase_started(&root);

    let mut accepted = vec![codec.encode(&root)];
    let mut layer = vec![root];
    for _ in 0..3 {
        let mut next_layer = Vec::new();
        for state in &layer {
            for piece in PieceId::all(state.piece_count()) {
                for direction in Direction::ALL {
                    let Some(next) = SlideMoveEngine.attempt_move(state, piece, direction) else {
                        continue;
                    };
                    let key = codec.encode(&next);
                    let seen_before = accepted.contains(&key);
                    assert_eq!(acceptor.is_accepted(&next), !seen_before);
                    // Offering it again is always rejected.
                    assert!(!acceptor.is_accepted(&next));
                    if !seen_before {
                        accepted.push(key);
                        next_layer.push(next);
                    }
                }
            }
        }
        layer = next_layer;
    }
    assert_eq!(acceptor.seen_count(), accepted.len());
}
