//! Iterated width: novelty-pruned breadth-first runs of growing width.

use gatesolver_core::{MoveEngine, PuzzleState};
use tracing::{info, warn};

use super::{BreadthFirstSearch, SearchOutcome};
use crate::acceptor::NoveltyAcceptor;
use crate::codec::StateCodec;
use crate::stats::SolverStats;

/// Result of an iterated width search.
#[derive(Debug, Clone)]
pub struct IteratedWidthOutcome {
    pub outcome: SearchOutcome,
    /// Width of the run that found the solution.
    pub solved_width: Option<usize>,
    /// Last width tried.
    pub last_width: usize,
    /// Index footprint of the last run, read before it was dropped.
    pub memory_usage: usize,
}

/// Runs IW(1), IW(2), ... up to the piece count, each with brand new
/// novelty indices, and stops at the first width that solves the puzzle.
///
/// # Example
///
/// ```
/// use gatesolver_core::{parse_map, SlideMoveEngine};
/// use gatesolver_solver::search::IteratedWidthSearch;
/// use gatesolver_solver::stats::SolverStats;
///
/// let root = parse_map("WWWWWWW\nWP0GG1W\nWWWWWWW").unwrap();
/// let mut stats = SolverStats::default();
///
/// let result = IteratedWidthSearch::new(&SlideMoveEngine).run(&root, &mut stats);
/// assert_eq!(result.solved_width, Some(2));
/// ```
#[derive(Debug)]
pub struct IteratedWidthSearch<'a, E> {
    engine: &'a E,
    max_width: Option<usize>,
    progress_interval: u64,
}

impl<'a, E: MoveEngine> IteratedWidthSearch<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self {
            engine,
            max_width: None,
            progress_interval: 0,
        }
    }

    /// Caps the widths tried. Caps above the piece count are clamped.
    pub fn with_max_width(mut self, max_width: Option<usize>) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// The widths a run over `root` tries, in order.
    pub fn widths(&self, root: &PuzzleState) -> std::ops::RangeInclusive<usize> {
        let full = root.piece_count().max(1);
        let last = match self.max_width {
            Some(cap) if cap > full => {
                warn!(
                    event = "max_width_clamped",
                    configured = cap,
                    piece_count = root.piece_count(),
                    clamped = full,
                );
                full
            }
            Some(cap) => cap.max(1),
            None => full,
        };
        1..=last
    }

    pub fn run(&self, root: &PuzzleState, stats: &mut SolverStats) -> IteratedWidthOutcome {
        let codec = StateCodec::for_state(root);
        let mut result = IteratedWidthOutcome {
            outcome: SearchOutcome::Exhausted,
            solved_width: None,
            last_width: 0,
            memory_usage: 0,
        };

        for width in self.widths(root) {
            let mut search =
                BreadthFirstSearch::new(self.engine, NoveltyAcceptor::new(codec, width))
                    .with_progress_interval(self.progress_interval)
                    .with_phase(width - 1, "IteratedWidth");
            let outcome = search.run(root, stats);
            result.memory_usage = search.memory_usage();
            result.last_width = width;
            let solved = outcome.is_solved();

            info!(
                event = "width_end",
                width,
                solved,
                memory_bytes = result.memory_usage,
            );

            if solved {
                result.outcome = outcome;
                result.solved_width = Some(width);
                break;
            }
        }
        result
    }
}
