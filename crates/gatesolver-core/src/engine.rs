//! Move application.

use std::fmt::Debug;

use crate::piece::{Direction, PieceId};
use crate::state::PuzzleState;

/// Produces successor states for the search.
///
/// Implementations must leave `state` untouched and hand back an
/// independent copy on success. `None` means the move is blocked by a
/// wall, the border or another occupant.
pub trait MoveEngine: Send + Debug {
    fn attempt_move(
        &self,
        state: &PuzzleState,
        piece: PieceId,
        direction: Direction,
    ) -> Option<PuzzleState>;
}

/// Slides a piece exactly one cell onto floor or goal.
///
/// # Example
///
/// ```
/// use gatesolver_core::{Direction, MoveEngine, PieceId, SlideMoveEngine};
///
/// let state = gatesolver_core::parse_map("WWWWW\nWP0GW\nWWWWW").unwrap();
/// let piece = PieceId::new(0).unwrap();
///
/// let next = SlideMoveEngine.attempt_move(&state, piece, Direction::Right).unwrap();
/// assert!(next.is_solved());
/// assert_eq!(next.path().as_str(), "0r");
///
/// assert!(SlideMoveEngine.attempt_move(&state, piece, Direction::Left).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideMoveEngine;

impl MoveEngine for SlideMoveEngine {
    fn attempt_move(
        &self,
        state: &PuzzleState,
        piece: PieceId,
        direction: Direction,
    ) -> Option<PuzzleState> {
        // Blocked moves never pay for the copy.
        state.destination(piece, direction)?;
        let mut next = state.clone();
        next.slide(piece, direction).then_some(next)
    }
}
