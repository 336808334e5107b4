//! gatesolver core - puzzle model for the gate solver
//!
//! This crate provides the pieces every search strategy builds on:
//! - [`Grid`] and the cell alphabet
//! - [`PuzzleState`] snapshots with their [`MovePath`]
//! - [`MoveEngine`] and the default [`SlideMoveEngine`]
//! - the map loader ([`load_map`], [`parse_map`])

pub mod engine;
pub mod error;
pub mod grid;
pub mod map;
pub mod piece;
pub mod state;

pub use engine::{MoveEngine, SlideMoveEngine};
pub use error::{GateSolverError, MapError, Result};
pub use grid::{cell, Grid, Position};
pub use map::{load_map, parse_map};
pub use piece::{Direction, PieceId, MAX_PIECES};
pub use state::{MovePath, PuzzleState};
