//! Level-order search parameterized by an acceptor.

use gatesolver_core::{Direction, MoveEngine, PieceId, PuzzleState};
use tracing::{debug, info, trace};

use super::SearchOutcome;
use crate::acceptor::Acceptor;
use crate::frontier::Frontier;
use crate::stats::{PhaseStats, SolverStats};

/// One breadth-first run from a root state.
///
/// Pops states in FIFO order, stops at the first one that is solved and
/// otherwise offers every legal `piece x direction` successor to the
/// acceptor. Each accepted successor is enqueued; everything else is
/// dropped on the spot.
///
/// # Example
///
/// ```
/// use gatesolver_core::{parse_map, SlideMoveEngine};
/// use gatesolver_solver::acceptor::AlwaysAcceptor;
/// use gatesolver_solver::search::BreadthFirstSearch;
/// use gatesolver_solver::stats::SolverStats;
///
/// let root = parse_map("WWWWWW\nWP0 GW\nWWWWWW").unwrap();
/// let mut stats = SolverStats::default();
/// let mut search = BreadthFirstSearch::new(&SlideMoveEngine, AlwaysAcceptor::new());
///
/// let solution = search.run(&root, &mut stats).into_solution().unwrap();
/// assert_eq!(solution.path().as_str(), "0r0r");
/// ```
#[derive(Debug)]
pub struct BreadthFirstSearch<'a, E, A> {
    engine: &'a E,
    acceptor: A,
    progress_interval: u64,
    phase_index: usize,
    phase_type: &'static str,
}

impl<'a, E, A> BreadthFirstSearch<'a, E, A>
where
    E: MoveEngine,
    A: Acceptor,
{
    pub fn new(engine: &'a E, acceptor: A) -> Self {
        Self {
            engine,
            acceptor,
            progress_interval: 0,
            phase_index: 0,
            phase_type: "BreadthFirst",
        }
    }

    /// Expansions between `progress` events; 0 disables them.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Labels the run in log events.
    pub fn with_phase(mut self, phase_index: usize, phase_type: &'static str) -> Self {
        self.phase_index = phase_index;
        self.phase_type = phase_type;
        self
    }

    pub fn acceptor(&self) -> &A {
        &self.acceptor
    }

    /// Bytes held by the acceptor's index.
    pub fn memory_usage(&self) -> usize {
        self.acceptor.memory_usage()
    }

    /// Runs to the first solution or until the frontier empties, adding
    /// this run's counters to `stats`.
    pub fn run(&mut self, root: &PuzzleState, stats: &mut SolverStats) -> SearchOutcome {
        let mut phase = PhaseStats::new(self.phase_index, self.phase_type);
        info!(
            event = "phase_start",
            phase = phase.phase_type,
            phase_index = phase.phase_index,
            acceptor = self.acceptor.acceptor_type_name(),
        );

        self.acceptor.phase_started(root);
        let mut frontier = Frontier::new();
        frontier.enqueue(root.clone());

        let mut outcome = SearchOutcome::Exhausted;
        while let Some(state) = frontier.dequeue() {
            if state.is_solved() {
                outcome = SearchOutcome::Solved(state);
                break;
            }
            phase.record_expansion();
            if self.progress_interval > 0 && phase.expanded % self.progress_interval == 0 {
                debug!(
                    event = "progress",
                    phase_index = phase.phase_index,
                    expanded = phase.expanded,
                    generated = phase.generated,
                    frontier = frontier.len(),
                    depth = state.path().steps(),
                    speed = phase.expansions_per_second(),
                );
            }
            self.expand(&state, &mut frontier, &mut phase);
        }
        frontier.clear();
        phase.merge_into(stats);

        info!(
            event = "phase_end",
            phase = phase.phase_type,
            phase_index = phase.phase_index,
            duration_ms = phase.elapsed().as_millis() as u64,
            solved = outcome.is_solved(),
            expanded = phase.expanded,
            generated = phase.generated,
            duplicated = phase.duplicated,
            peak_frontier = frontier.peak_len(),
            speed = phase.expansions_per_second(),
        );
        outcome
    }

    fn expand(
        &mut self,
        state: &PuzzleState,
        frontier: &mut Frontier<PuzzleState>,
        phase: &mut PhaseStats,
    ) {
        for piece in PieceId::all(state.piece_count()) {
            for direction in Direction::ALL {
                let Some(next) = self.engine.attempt_move(state, piece, direction) else {
                    continue;
                };
                let accepted = self.acceptor.is_accepted(&next);
                phase.record_successor(accepted);
                if accepted {
                    trace!(event = "successor", path = next.path().as_str());
                    frontier.enqueue(next);
                }
            }
        }
    }
}
