//! Puzzle fixtures.
//!
//! Each constant documents the shortest solution length and, where it
//! matters, the smallest iterated width that finds it.

use gatesolver_core::{parse_map, PuzzleState};

/// One piece directly below its goal. Shortest: `0u` (1 step), width 1.
pub const ONE_STEP: &str = "\
WWWWW
W G W
WP0 W
WWWWW";

/// Two pieces sliding onto two adjacent goals from both ends.
/// Shortest: `0r1l` (2 steps). Width 1 exhausts, width 2 solves.
pub const TWO_GOALS: &str = "\
WWWWWWW
WP0GG1W
WWWWWWW";

/// Piece 0 already on a goal, piece 1 two cells from the other.
/// Shortest: `1r1r` (2 steps), width 1.
pub const DOUBLE_PUSH: &str = "\
WWWWWWW
WPa1 GW
WWWWWWW";

/// Piece 0 must step off its goal onto the far one before piece 1 can
/// fill the gap. Shortest: 3 steps. Width 1 exhausts, width 2 solves.
pub const GOAL_HANDOFF: &str = "\
WWWWWWW
WP1 aGW
WWWWWWW";

/// A piece walled in on every side. No legal move at all.
pub const ENCLOSED: &str = "\
WWWWWW
WP0WGW
WWWWWW";

/// Two pieces, each walled into its own cell, and an unreachable goal.
/// No legal move, so every strategy exhausts; iterated width tries
/// widths 1 and 2.
pub const WALLED_PAIR: &str = "\
WWWWWWWW
WP0W1WGW
WWWWWWWW";

/// A piece free to shuffle between two cells that never reach the goal.
pub const SEALED_GOAL: &str = "\
WWWWWWW
WP0 WGW
WWWWWWW";

/// Three pieces in a row, one floor cell, one goal.
pub const THREE_IN_ROW: &str = "\
WWWWWWWW
WP012 GW
WWWWWWWW";

/// Nothing to do: no goals and no pieces.
pub const EMPTY_ROOM: &str = "\
WWWW
WP W
WWWW";

/// An open room where pieces can wander. Shortest: 3 steps.
pub const OPEN_ROOM: &str = "\
WWWWWW
WG   W
W 0  W
W  1GW
WP   W
WWWWWW";

/// Loads a fixture map.
///
/// # Panics
///
/// Panics if the map is invalid, which is a bug in the fixture.
pub fn puzzle(map: &str) -> PuzzleState {
    parse_map(map).unwrap_or_else(|e| panic!("invalid fixture map: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fixtures_load() {
        for map in [
            ONE_STEP,
            TWO_GOALS,
            DOUBLE_PUSH,
            GOAL_HANDOFF,
            ENCLOSED,
            SEALED_GOAL,
            WALLED_PAIR,
            THREE_IN_ROW,
            EMPTY_ROOM,
            OPEN_ROOM,
        ] {
            puzzle(map);
        }
    }

    #[test]
    fn test_only_empty_room_starts_solved() {
        assert!(puzzle(EMPTY_ROOM).is_solved());
        assert!(!puzzle(ONE_STEP).is_solved());
        assert!(!puzzle(GOAL_HANDOFF).is_solved());
    }
}
