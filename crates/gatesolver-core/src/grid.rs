//! Rectangular character grid.

use std::fmt;

use crate::piece::{Direction, PieceId};

/// Cell alphabet shared by the loader, the move engine and the win check.
pub mod cell {
    pub const WALL: u8 = b'W';
    pub const FLOOR: u8 = b' ';
    pub const GOAL: u8 = b'G';
    pub const PLAYER: u8 = b'P';

    /// First character of the piece-on-goal range (`a` is piece 0).
    pub const PIECE_ON_GOAL: u8 = b'a';

    /// Returns true for `0`-`9`.
    #[inline]
    pub fn is_piece(c: u8) -> bool {
        c.is_ascii_digit()
    }

    /// Returns true if a piece may slide onto this cell.
    #[inline]
    pub fn is_open(c: u8) -> bool {
        c == FLOOR || c == GOAL
    }
}

/// A cell coordinate: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A rectangular grid of cell characters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates a grid from row-major cells.
    ///
    /// `cells.len()` must equal `rows * width`.
    pub fn new(rows: usize, width: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), rows * width);
        Self { rows, width, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<u8> {
        if pos.x < self.width && pos.y < self.rows {
            Some(self.cells[pos.y * self.width + pos.x])
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, value: u8) {
        self.cells[pos.y * self.width + pos.x] = value;
    }

    /// Returns the neighbour of `pos` in `dir`, or `None` past the border.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.offset();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        (x < self.width && y < self.rows).then_some(Position { x, y })
    }

    /// Returns row `y`.
    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Iterates all cells with their positions, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &c)| {
            (
                Position {
                    x: i % self.width,
                    y: i / self.width,
                },
                c,
            )
        })
    }

    /// Counts cells equal to `value`.
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// The character a piece shows on the grid.
    #[inline]
    pub fn piece_cell(piece: PieceId) -> u8 {
        b'0' + piece.as_u8()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            writeln!(f, "{}", String::from_utf8_lossy(self.row(y)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::new(2, 3, b"W GP0W".to_vec())
    }

    #[test]
    fn test_dimensions() {
        let grid = sample();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.cell_count(), 6);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = sample();
        assert_eq!(grid.get(Position::new(2, 0)), Some(cell::GOAL));
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.get(Position::new(0, 2)), None);
    }

    #[test]
    fn test_step_stops_at_border() {
        let grid = sample();
        let origin = Position::new(0, 0);
        assert_eq!(grid.step(origin, Direction::Up), None);
        assert_eq!(grid.step(origin, Direction::Left), None);
        assert_eq!(
            grid.step(origin, Direction::Right),
            Some(Position::new(1, 0))
        );
        assert_eq!(grid.step(Position::new(2, 1), Direction::Down), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "W G\nP0W\n");
    }

    #[test]
    fn test_count() {
        let grid = sample();
        assert_eq!(grid.count(cell::WALL), 2);
        assert_eq!(grid.count(cell::FLOOR), 1);
    }
}
