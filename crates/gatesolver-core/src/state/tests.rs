//! Tests for puzzle states and the slide rule.

use super::*;
use crate::map::parse_map;

fn piece(id: u8) -> PieceId {
    PieceId::new(id).unwrap()
}

#[test]
fn test_slide_updates_grid_and_positions() {
    let mut state = parse_map("WWWWWW\nWP0 GW\nWWWWWW").unwrap();
    assert!(state.slide(piece(0), Direction::Right));

    assert_eq!(state.piece_position(piece(0)), Position::new(3, 1));
    assert_eq!(state.grid().row(1), b"WP 0GW");
    assert_eq!(state.path().as_str(), "0r");
    assert!(!state.is_solved());
}

#[test]
fn test_slide_blocked_leaves_state_untouched() {
    let mut state = parse_map("WWWWW\nWP0GW\nWWWWW").unwrap();
    let before = state.grid().clone();

    assert!(!state.slide(piece(0), Direction::Up));
    assert!(!state.slide(piece(0), Direction::Left));
    assert_eq!(state.grid(), &before);
    assert!(state.path().is_empty());
}

#[test]
fn test_slide_blocked_by_other_piece() {
    let mut state = parse_map("WWWWWW\nWP01GW\nWWWWWW").unwrap();
    assert!(!state.slide(piece(0), Direction::Right));
    assert!(state.slide(piece(1), Direction::Right));
    assert!(state.is_solved());
}

#[test]
fn test_leaving_goal_restores_marker() {
    let mut state = parse_map("WWWWW\nWPa W\nWWWWW").unwrap();
    assert!(state.is_solved());

    assert!(state.slide(piece(0), Direction::Right));
    assert_eq!(state.grid().row(1), b"WPG0W");
    assert!(!state.is_solved());

    assert!(state.slide(piece(0), Direction::Left));
    assert!(state.is_solved());
    assert_eq!(state.path().as_str(), "0r0l");
}

#[test]
fn test_slide_off_border_is_blocked() {
    let mut state = parse_map("P0G").unwrap();
    assert!(!state.slide(piece(0), Direction::Up));
    assert!(!state.slide(piece(0), Direction::Down));
}

#[test]
fn test_clone_is_independent() {
    let state = parse_map("WWWWWW\nWP0 GW\nWWWWWW").unwrap();
    let mut copy = state.clone();
    copy.slide(piece(0), Direction::Right);

    assert_eq!(state.piece_position(piece(0)), Position::new(2, 1));
    assert!(state.path().is_empty());
    assert_eq!(copy.path().steps(), 1);
    assert!(Arc::ptr_eq(state.reference_grid(), copy.reference_grid()));
}

#[test]
fn test_empty_cells() {
    let state = parse_map("WWWWWW\nWP0 GW\nWWWWWW").unwrap();
    assert_eq!(state.empty_cells(), 1);
}

#[test]
fn test_no_goals_is_solved() {
    let state = parse_map("WWWW\nWP0W\nWWWW").unwrap();
    assert!(state.is_solved());
}

#[test]
fn test_move_path_parses_back() {
    let mut path = MovePath::new();
    path.push(piece(2), Direction::Down);
    path.push(piece(0), Direction::Right);

    let moves: Vec<_> = path.moves().collect();
    assert_eq!(
        moves,
        vec![(piece(2), Direction::Down), (piece(0), Direction::Right)]
    );
    assert_eq!(path.to_string(), "2d0r");
}
