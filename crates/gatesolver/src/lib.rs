//! gatesolver - shortest solutions for numbered-piece goal puzzles
//!
//! Load a map, pick a strategy and solve:
//!
//! ```rust
//! use gatesolver::prelude::*;
//!
//! let initial = parse_map("WWWWWWW\nWP0GG1W\nWWWWWWW").unwrap();
//! let report = Solver::new(SolverConfig::default()).solve(&initial).unwrap();
//!
//! assert_eq!(report.steps(), 2);
//! assert_eq!(report.solved_width, Some(2));
//! ```

use std::path::Path;

pub use gatesolver_config::{ConfigError, IteratedWidthConfig, SolverConfig, StrategyType};
pub use gatesolver_core::{
    load_map, parse_map, Direction, GateSolverError, MapError, MoveEngine, MovePath, PieceId,
    PuzzleState, Result, SlideMoveEngine, MAX_PIECES,
};
pub use gatesolver_solver::{SolveReport, SolveStatus, Solver, SolverStats};

/// Lower-level building blocks: codec, indices, acceptors and drivers.
pub mod search {
    pub use gatesolver_solver::acceptor::{
        Acceptor, AlwaysAcceptor, DuplicateStateAcceptor, NoveltyAcceptor,
    };
    pub use gatesolver_solver::codec::{PackedStateKey, StateCodec};
    pub use gatesolver_solver::index::{Combinations, NoveltyTable, RadixTree};
    pub use gatesolver_solver::search::{
        BreadthFirstSearch, IteratedWidthOutcome, IteratedWidthSearch, SearchOutcome,
    };
}

#[cfg(feature = "console")]
pub use gatesolver_console as console;

/// Loads the map at `path` and solves it with `config`.
///
/// # Errors
///
/// Returns [`GateSolverError::Map`] if the map cannot be read or is
/// invalid, plus anything [`Solver::solve`] returns.
pub fn solve_file(path: impl AsRef<Path>, config: SolverConfig) -> Result<SolveReport> {
    let initial = load_map(path)?;
    Solver::new(config).solve(&initial)
}

pub mod prelude {
    pub use super::{
        load_map, parse_map, solve_file, Direction, PieceId, PuzzleState, SolveReport,
        SolveStatus, Solver, SolverConfig, StrategyType,
    };
}
