//! Strategy dispatch.

use gatesolver_config::{SolverConfig, StrategyType};
use gatesolver_core::{
    GateSolverError, MoveEngine, PuzzleState, Result, SlideMoveEngine, MAX_PIECES,
};
use tracing::info;

use crate::acceptor::{Acceptor, AlwaysAcceptor, DuplicateStateAcceptor};
use crate::codec::StateCodec;
use crate::report::{SolveReport, SolveStatus};
use crate::search::{BreadthFirstSearch, IteratedWidthSearch, SearchOutcome};
use crate::stats::SolverStats;

/// Runs the configured strategy over an initial state.
///
/// The initial state is only borrowed; every state the search creates is
/// released before [`solve`](Self::solve) returns, except the winning one
/// handed back in the report.
///
/// # Example
///
/// ```
/// use gatesolver_config::{SolverConfig, StrategyType};
/// use gatesolver_core::parse_map;
/// use gatesolver_solver::Solver;
///
/// let initial = parse_map("WWWWW\nW G W\nWP0 W\nWWWWW").unwrap();
/// let config = SolverConfig::new().with_strategy(StrategyType::MemoizedBfs);
///
/// let report = Solver::new(config).solve(&initial).unwrap();
/// assert!(report.is_solved());
/// assert_eq!(report.solution_path(), "0u");
/// ```
#[derive(Debug, Clone)]
pub struct Solver<E = SlideMoveEngine> {
    config: SolverConfig,
    engine: E,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self::with_engine(config, SlideMoveEngine)
    }
}

impl<E: MoveEngine> Solver<E> {
    /// Uses a custom move engine.
    pub fn with_engine(config: SolverConfig, engine: E) -> Self {
        Self { config, engine }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Searches for a shortest solution.
    ///
    /// # Errors
    ///
    /// Returns [`GateSolverError::Config`] for an invalid configuration and
    /// [`GateSolverError::InvalidState`] for a state with more than
    /// [`MAX_PIECES`] pieces. Finding no solution is not an error.
    pub fn solve(&self, initial: &PuzzleState) -> Result<SolveReport> {
        self.config
            .validate()
            .map_err(|e| GateSolverError::Config(e.to_string()))?;
        if initial.piece_count() > MAX_PIECES {
            return Err(GateSolverError::InvalidState(format!(
                "{} pieces, at most {MAX_PIECES} supported",
                initial.piece_count()
            )));
        }

        let strategy = self.config.strategy;
        let codec = StateCodec::for_state(initial);
        info!(
            event = "solve_start",
            strategy = %strategy,
            pieces = initial.piece_count(),
            rows = initial.rows(),
            width = initial.width(),
            key_bits = codec.packed_size(),
        );

        let mut stats = SolverStats::default();
        stats.start();
        let (outcome, memory_usage, solved_width) = match strategy {
            StrategyType::PlainBfs => {
                let (outcome, memory) =
                    self.run_bfs(initial, AlwaysAcceptor::new(), "PlainBfs", &mut stats);
                (outcome, memory, None)
            }
            StrategyType::MemoizedBfs => {
                let (outcome, memory) = self.run_bfs(
                    initial,
                    DuplicateStateAcceptor::new(codec),
                    "MemoizedBfs",
                    &mut stats,
                );
                (outcome, memory, None)
            }
            StrategyType::IteratedWidth => {
                let result = IteratedWidthSearch::new(&self.engine)
                    .with_max_width(self.config.max_width())
                    .with_progress_interval(self.config.progress_interval)
                    .run(initial, &mut stats);
                (result.outcome, result.memory_usage, result.solved_width)
            }
        };
        stats.stop();

        let solution = outcome.into_solution();
        let status = if solution.is_some() {
            SolveStatus::Solved
        } else {
            SolveStatus::Exhausted
        };
        let empty_cells = solution.as_ref().unwrap_or(initial).empty_cells();

        info!(
            event = "solve_end",
            status = %status,
            expanded = stats.expanded,
            generated = stats.generated,
            duplicated = stats.duplicated,
            memory_bytes = memory_usage,
            duration_ms = stats.elapsed().as_millis() as u64,
        );

        Ok(SolveReport {
            status,
            strategy,
            solution,
            stats,
            memory_usage,
            piece_count: initial.piece_count(),
            empty_cells,
            solved_width,
        })
    }

    fn run_bfs<A: Acceptor>(
        &self,
        initial: &PuzzleState,
        acceptor: A,
        phase_type: &'static str,
        stats: &mut SolverStats,
    ) -> (SearchOutcome, usize) {
        let mut search = BreadthFirstSearch::new(&self.engine, acceptor)
            .with_progress_interval(self.config.progress_interval)
            .with_phase(0, phase_type);
        let outcome = search.run(initial, stats);
        (outcome, search.memory_usage())
    }
}
