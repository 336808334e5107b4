//! Puzzle state snapshots.
//!
//! A [`PuzzleState`] owns its grid, piece positions and move path outright.
//! `Clone` is the deep copy the search uses for every successor; the only
//! shared part is the reference grid, which never changes after loading.

use std::fmt;
use std::sync::Arc;

use crate::grid::{cell, Grid, Position};
use crate::piece::{Direction, PieceId};

/// The moves that led to a state, as interleaved `<piece><direction>` pairs.
///
/// # Example
///
/// ```
/// use gatesolver_core::{Direction, MovePath, PieceId};
///
/// let mut path = MovePath::new();
/// path.push(PieceId::new(1).unwrap(), Direction::Left);
/// path.push(PieceId::new(0).unwrap(), Direction::Up);
///
/// assert_eq!(path.as_str(), "1l0u");
/// assert_eq!(path.steps(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MovePath(String);

impl MovePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one move (two characters).
    pub fn push(&mut self, piece: PieceId, direction: Direction) {
        self.0.push(piece.as_char());
        self.0.push(direction.as_char());
    }

    /// Number of moves recorded.
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates the recorded moves in order.
    pub fn moves(&self) -> impl Iterator<Item = (PieceId, Direction)> + '_ {
        self.0.as_bytes().chunks_exact(2).filter_map(|pair| {
            Some((
                PieceId::from_char(pair[0] as char)?,
                Direction::from_char(pair[1] as char)?,
            ))
        })
    }
}

impl fmt::Display for MovePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A snapshot of the puzzle.
///
/// The grid and the piece positions always agree: the cell at
/// `pieces[i]` shows piece `i`'s digit and no other cell does.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    grid: Grid,
    reference: Arc<Grid>,
    pieces: Vec<Position>,
    player: Position,
    path: MovePath,
}

impl PuzzleState {
    pub(crate) fn from_parts(
        grid: Grid,
        reference: Grid,
        pieces: Vec<Position>,
        player: Position,
    ) -> Self {
        Self {
            grid,
            reference: Arc::new(reference),
            pieces,
            player,
            path: MovePath::new(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The grid as loaded, with goal markers under pieces restored.
    #[inline]
    pub fn reference_grid(&self) -> &Arc<Grid> {
        &self.reference
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Piece positions indexed by piece identifier.
    #[inline]
    pub fn pieces(&self) -> &[Position] {
        &self.pieces
    }

    #[inline]
    pub fn piece_position(&self, piece: PieceId) -> Position {
        self.pieces[piece.index()]
    }

    #[inline]
    pub fn player(&self) -> Position {
        self.player
    }

    #[inline]
    pub fn path(&self) -> &MovePath {
        &self.path
    }

    /// Returns true when no goal marker remains uncovered.
    pub fn is_solved(&self) -> bool {
        self.reference
            .cells()
            .filter(|&(_, c)| c == cell::GOAL)
            .all(|(pos, _)| self.grid.get(pos) != Some(cell::GOAL))
    }

    /// Number of empty floor cells.
    pub fn empty_cells(&self) -> usize {
        self.grid.count(cell::FLOOR)
    }

    /// Where `piece` would land moving in `direction`, if the cell is open.
    pub fn destination(&self, piece: PieceId, direction: Direction) -> Option<Position> {
        let from = *self.pieces.get(piece.index())?;
        let to = self.grid.step(from, direction)?;
        self.grid
            .get(to)
            .filter(|&c| cell::is_open(c))
            .map(|_| to)
    }

    /// Slides `piece` one cell in place. Returns false, leaving the state
    /// untouched, when the move is blocked.
    pub fn slide(&mut self, piece: PieceId, direction: Direction) -> bool {
        let Some(to) = self.destination(piece, direction) else {
            return false;
        };
        let from = self.pieces[piece.index()];
        let restored = match self.reference.get(from) {
            Some(cell::GOAL) => cell::GOAL,
            _ => cell::FLOOR,
        };
        self.grid.set(from, restored);
        self.grid.set(to, Grid::piece_cell(piece));
        self.pieces[piece.index()] = to;
        self.path.push(piece, direction);
        true
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests;
