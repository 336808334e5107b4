//! Piece identifiers and move directions.

use std::fmt;

/// Largest number of pieces a map may hold (identifiers `0`-`9`).
pub const MAX_PIECES: usize = 10;

/// Identifier of a movable piece, bounded to `0..MAX_PIECES`.
///
/// # Example
///
/// ```
/// use gatesolver_core::PieceId;
///
/// let id = PieceId::from_char('3').unwrap();
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.as_char(), '3');
/// assert!(PieceId::new(10).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(u8);

impl PieceId {
    /// Creates an identifier, or `None` if it is out of range.
    pub fn new(id: u8) -> Option<Self> {
        ((id as usize) < MAX_PIECES).then_some(Self(id))
    }

    /// Parses a piece digit.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// The digit used for this piece on the grid and in move paths.
    #[inline]
    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Iterates identifiers `0..count` in ascending order.
    pub fn all(count: usize) -> impl Iterator<Item = PieceId> {
        (0..count.min(MAX_PIECES)).map(|i| PieceId(i as u8))
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the four directions a piece can slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The character recorded in a move path.
    pub fn as_char(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Column and row delta of one step.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_id_bounds() {
        assert!(PieceId::new(9).is_some());
        assert!(PieceId::new(10).is_none());
        assert!(PieceId::from_char('x').is_none());
    }

    #[test]
    fn test_piece_id_all() {
        let ids: Vec<char> = PieceId::all(3).map(PieceId::as_char).collect();
        assert_eq!(ids, vec!['0', '1', '2']);
        assert_eq!(PieceId::all(12).count(), MAX_PIECES);
    }

    #[test]
    fn test_direction_chars_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_char(dir.as_char()), Some(dir));
        }
        assert_eq!(Direction::from_char('x'), None);
    }

    #[test]
    fn test_direction_opposite_cancels_offset() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
