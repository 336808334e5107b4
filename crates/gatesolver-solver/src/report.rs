//! Solve results and the diagnostics block printed after a run.

use std::fmt;

use gatesolver_config::StrategyType;
use gatesolver_core::PuzzleState;

use crate::stats::SolverStats;

/// Terminal status of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Solved,
    /// Every reachable (or every novel) state was expanded without a win.
    Exhausted,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Solved => write!(f, "Solved"),
            SolveStatus::Exhausted => write!(f, "Exhausted"),
        }
    }
}

/// Everything a solve produced.
///
/// The `Display` impl renders the diagnostics block:
///
/// ```text
/// Solution path: 0r1l
/// Execution time: 0.000041
/// Expanded nodes: 9
/// ...
/// ```
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub status: SolveStatus,
    pub strategy: StrategyType,
    /// The winning state; `None` when exhausted.
    pub solution: Option<PuzzleState>,
    pub stats: SolverStats,
    /// Bytes held by the duplicate or novelty indices at the end of the
    /// last run.
    pub memory_usage: usize,
    pub piece_count: usize,
    /// Empty floor cells of the winning state, or of the initial state
    /// when exhausted.
    pub empty_cells: usize,
    /// Width that solved the puzzle; iterated width only.
    pub solved_width: Option<usize>,
}

impl SolveReport {
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }

    /// The winning move string, empty when exhausted.
    pub fn solution_path(&self) -> &str {
        self.solution.as_ref().map_or("", |s| s.path().as_str())
    }

    /// Moves in the solution.
    pub fn steps(&self) -> usize {
        self.solution.as_ref().map_or(0, |s| s.path().steps())
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution path: {}", self.solution_path())?;
        writeln!(
            f,
            "Execution time: {:.6}",
            self.stats.elapsed().as_secs_f64()
        )?;
        writeln!(f, "Expanded nodes: {}", self.stats.expanded)?;
        writeln!(f, "Generated nodes: {}", self.stats.generated)?;
        writeln!(f, "Duplicated nodes: {}", self.stats.duplicated)?;
        writeln!(f, "Auxiliary memory usage (bytes): {}", self.memory_usage)?;
        writeln!(f, "Number of pieces in the puzzle: {}", self.piece_count)?;
        writeln!(f, "Number of steps in solution: {}", self.steps())?;
        writeln!(f, "Number of empty spaces: {}", self.empty_cells)?;
        if self.strategy == StrategyType::IteratedWidth {
            if let Some(width) = self.solved_width {
                writeln!(f, "Solved by IW({width})")?;
            }
        }
        writeln!(
            f,
            "Number of nodes expanded per second: {:.6}",
            self.stats.expansions_per_second()
        )
    }
}
