//! Map loading and validation.
//!
//! Maps are plain text, one grid row per line:
//!
//! | char | cell |
//! |---|---|
//! | `W` | wall |
//! | space | floor |
//! | `G` | goal |
//! | `P` | player |
//! | `0`-`9` | piece on floor |
//! | `a`-`j` | piece `0`-`9` on a goal |

use std::path::Path;
use std::str::FromStr;

use crate::error::MapError;
use crate::grid::{cell, Grid, Position};
use crate::piece::{PieceId, MAX_PIECES};
use crate::state::PuzzleState;

/// Loads and validates a map file.
pub fn load_map(path: impl AsRef<Path>) -> Result<PuzzleState, MapError> {
    let contents = std::fs::read_to_string(path)?;
    parse_map(&contents)
}

/// Parses and validates map text.
///
/// # Example
///
/// ```
/// use gatesolver_core::parse_map;
///
/// let state = parse_map("WWWWWW\nWP0 GW\nWWWWWW").unwrap();
/// assert_eq!(state.piece_count(), 1);
/// assert_eq!(state.rows(), 3);
/// assert_eq!(state.width(), 6);
/// ```
pub fn parse_map(text: &str) -> Result<PuzzleState, MapError> {
    let mut lines: Vec<&str> = text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(MapError::Empty);
    }

    let width = lines[0].len();
    let rows = lines.len();
    let mut cells = Vec::with_capacity(rows * width);
    let mut reference = Vec::with_capacity(rows * width);
    let mut pieces: [Option<Position>; MAX_PIECES] = [None; MAX_PIECES];
    let mut player = None;

    for (y, line) in lines.iter().enumerate() {
        if line.len() != width {
            return Err(MapError::Ragged {
                row: y,
                expected: width,
                found: line.len(),
            });
        }
        for (x, ch) in line.bytes().enumerate() {
            let pos = Position::new(x, y);
            let (shown, under) = match ch {
                cell::WALL | cell::FLOOR | cell::GOAL => (ch, ch),
                cell::PLAYER => {
                    if player.is_some() {
                        return Err(MapError::DuplicatePlayer { row: y, column: x });
                    }
                    player = Some(pos);
                    (ch, cell::FLOOR)
                }
                b'0'..=b'9' => {
                    place_piece(&mut pieces, ch - b'0', pos)?;
                    (ch, cell::FLOOR)
                }
                b'a'..=b'j' => {
                    let id = ch - cell::PIECE_ON_GOAL;
                    place_piece(&mut pieces, id, pos)?;
                    (b'0' + id, cell::GOAL)
                }
                _ => {
                    return Err(MapError::UnknownCell {
                        ch: ch as char,
                        row: y,
                        column: x,
                    })
                }
            };
            cells.push(shown);
            reference.push(under);
        }
    }

    let player = player.ok_or(MapError::MissingPlayer)?;
    let count = pieces.iter().take_while(|p| p.is_some()).count();
    if pieces[count..].iter().any(Option::is_some) {
        return Err(MapError::NonContiguousPieces {
            missing: count as u8,
        });
    }
    let pieces = pieces.into_iter().take(count).flatten().collect();

    Ok(PuzzleState::from_parts(
        Grid::new(rows, width, cells),
        Grid::new(rows, width, reference),
        pieces,
        player,
    ))
}

fn place_piece(
    pieces: &mut [Option<Position>; MAX_PIECES],
    id: u8,
    pos: Position,
) -> Result<(), MapError> {
    let slot = &mut pieces[id as usize];
    if slot.is_some() {
        let piece = PieceId::new(id).map_or('?', PieceId::as_char);
        return Err(MapError::DuplicatePiece(piece));
    }
    *slot = Some(pos);
    Ok(())
}

impl FromStr for PuzzleState {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_map(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positions() {
        let state = parse_map("WWWWWW\nW1P0GW\nWWWWWW\n").unwrap();
        assert_eq!(state.piece_count(), 2);
        assert_eq!(state.pieces(), &[Position::new(3, 1), Position::new(1, 1)]);
        assert_eq!(state.player(), Position::new(2, 1));
        assert!(state.path().is_empty());
    }

    #[test]
    fn test_piece_on_goal() {
        let state = parse_map("WWWW\nWPbW\nW0GW\nWWWW").unwrap();
        assert_eq!(state.grid().get(Position::new(2, 1)), Some(b'1'));
        assert_eq!(
            state.reference_grid().get(Position::new(2, 1)),
            Some(cell::GOAL)
        );
        let piece = PieceId::new(1).unwrap();
        assert_eq!(state.piece_position(piece), Position::new(2, 1));
    }

    #[test]
    fn test_crlf_and_trailing_blank_lines() {
        let state = "WWW\r\nP0G\r\nWWW\r\n\r\n".parse::<PuzzleState>().unwrap();
        assert_eq!(state.rows(), 3);
        assert_eq!(state.width(), 3);
    }

    #[test]
    fn test_empty_map() {
        assert!(matches!(parse_map(""), Err(MapError::Empty)));
        assert!(matches!(parse_map("\n\n"), Err(MapError::Empty)));
    }

    #[test]
    fn test_ragged_rows() {
        let err = parse_map("WWWW\nWP0\nWWWW").unwrap_err();
        assert!(matches!(
            err,
            MapError::Ragged {
                row: 1,
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_player_rules() {
        assert!(matches!(parse_map("W0GW"), Err(MapError::MissingPlayer)));
        assert!(matches!(
            parse_map("P0PG"),
            Err(MapError::DuplicatePlayer { row: 0, column: 2 })
        ));
    }

    #[test]
    fn test_duplicate_piece() {
        assert!(matches!(
            parse_map("P0G0"),
            Err(MapError::DuplicatePiece('0'))
        ));
        assert!(matches!(
            parse_map("P0Ga"),
            Err(MapError::DuplicatePiece('0'))
        ));
    }

    #[test]
    fn test_non_contiguous_pieces() {
        assert!(matches!(
            parse_map("P0G2"),
            Err(MapError::NonContiguousPieces { missing: 1 })
        ));
    }

    #[test]
    fn test_unknown_cell() {
        assert!(matches!(
            parse_map("P0#G"),
            Err(MapError::UnknownCell {
                ch: '#',
                row: 0,
                column: 2
            })
        ));
    }
}
