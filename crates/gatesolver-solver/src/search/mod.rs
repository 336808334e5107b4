//! Breadth-first search drivers.

mod bfs;
mod iterated_width;

use gatesolver_core::PuzzleState;

pub use bfs::BreadthFirstSearch;
pub use iterated_width::{IteratedWidthOutcome, IteratedWidthSearch};

/// How a search run ended.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The first state popped with every goal covered.
    Solved(PuzzleState),
    /// The frontier emptied without a solution.
    Exhausted,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn into_solution(self) -> Option<PuzzleState> {
        match self {
            SearchOutcome::Solved(state) => Some(state),
            SearchOutcome::Exhausted => None,
        }
    }
}
