//! Error types for gatesolver

use thiserror::Error;

/// Failure to turn map text into a valid initial state.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The map has no rows.
    #[error("map is empty")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map has no player cell")]
    MissingPlayer,

    #[error("second player cell at row {row}, column {column}")]
    DuplicatePlayer { row: usize, column: usize },

    #[error("piece {0} appears more than once")]
    DuplicatePiece(char),

    /// Piece identifiers must run from 0 without gaps.
    #[error("piece {missing} is missing but higher identifiers are present")]
    NonContiguousPieces { missing: u8 },

    #[error("unknown cell {ch:?} at row {row}, column {column}")]
    UnknownCell { ch: char, row: usize, column: usize },
}

/// Main error type for gatesolver operations
#[derive(Debug, Error)]
pub enum GateSolverError {
    /// The puzzle map could not be loaded
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The state cannot be searched (e.g. too many pieces for the codec)
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for gatesolver operations
pub type Result<T> = std::result::Result<T, GateSolverError>;
