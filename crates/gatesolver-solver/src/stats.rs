//! Search statistics.
//!
//! Counters shared by every strategy. Iterated width keeps one
//! [`SolverStats`] across all widths, so its totals accumulate.

use std::time::{Duration, Instant};

/// Solver-level statistics.
///
/// # Example
///
/// ```
/// use gatesolver_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_expansion();
/// stats.record_successor(true);
/// stats.record_successor(false);
/// stats.stop();
///
/// assert_eq!(stats.expanded, 1);
/// assert_eq!(stats.generated, 1);
/// assert_eq!(stats.duplicated, 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SolverStats {
    start_time: Option<Instant>,
    frozen: Option<Duration>,
    /// States popped from the frontier that were not solutions.
    pub expanded: u64,
    /// Successors accepted into the frontier.
    pub generated: u64,
    /// Legal successors the acceptor rejected.
    pub duplicated: u64,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.frozen = None;
    }

    /// Freezes the elapsed time.
    pub fn stop(&mut self) {
        self.frozen = Some(self.elapsed());
    }

    /// Time since [`start`](Self::start), or the frozen value after
    /// [`stop`](Self::stop).
    pub fn elapsed(&self) -> Duration {
        self.frozen
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    pub fn record_expansion(&mut self) {
        self.expanded += 1;
    }

    /// Records a legal successor and whether it was accepted.
    pub fn record_successor(&mut self, accepted: bool) {
        if accepted {
            self.generated += 1;
        } else {
            self.duplicated += 1;
        }
    }

    /// Expanded nodes per second, counting the root.
    pub fn expansions_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.expanded + 1) as f64 / secs
        } else {
            0.0
        }
    }
}

/// Counters for one breadth-first run.
///
/// # Example
///
/// ```
/// use gatesolver_solver::stats::PhaseStats;
///
/// let mut stats = PhaseStats::new(1, "IteratedWidth");
/// stats.record_expansion();
/// stats.record_successor(false);
///
/// assert_eq!(stats.phase_index, 1);
/// assert_eq!(stats.phase_type, "IteratedWidth");
/// assert_eq!(stats.expanded, 1);
/// assert_eq!(stats.duplicated, 1);
/// ```
#[derive(Debug)]
pub struct PhaseStats {
    pub phase_index: usize,
    pub phase_type: &'static str,
    start_time: Instant,
    pub expanded: u64,
    pub generated: u64,
    pub duplicated: u64,
}

impl PhaseStats {
    pub fn new(phase_index: usize, phase_type: &'static str) -> Self {
        Self {
            phase_index,
            phase_type,
            start_time: Instant::now(),
            expanded: 0,
            generated: 0,
            duplicated: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn record_expansion(&mut self) {
        self.expanded += 1;
    }

    pub fn record_successor(&mut self, accepted: bool) {
        if accepted {
            self.generated += 1;
        } else {
            self.duplicated += 1;
        }
    }

    /// Expansions per second, truncated.
    pub fn expansions_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.expanded as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Adds this phase's counters to the run totals.
    pub fn merge_into(&self, totals: &mut SolverStats) {
        totals.expanded += self.expanded;
        totals.generated += self.generated;
        totals.duplicated += self.duplicated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_before_start_is_zero() {
        let stats = SolverStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);
        assert_eq!(stats.expansions_per_second(), 0.0);
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let mut stats = SolverStats::default();
        stats.start();
        std::thread::sleep(Duration::from_millis(2));
        stats.stop();
        let frozen = stats.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(stats.elapsed(), frozen);
        assert!(frozen >= Duration::from_millis(2));
    }

    #[test]
    fn test_phase_keeps_its_labels() {
        let phase = PhaseStats::new(2, "MemoizedBfs");
        assert_eq!(phase.phase_index, 2);
        assert_eq!(phase.phase_type, "MemoizedBfs");
        assert_eq!(phase.expansions_per_second(), 0);
    }

    #[test]
    fn test_phase_merge_accumulates() {
        let mut totals = SolverStats::default();
        for width in 1..=2 {
            let mut phase = PhaseStats::new(width - 1, "IteratedWidth");
            phase.record_expansion();
            phase.record_successor(true);
            phase.record_successor(false);
            phase.merge_into(&mut totals);
        }
        assert_eq!(totals.expanded, 2);
        assert_eq!(totals.generated, 2);
        assert_eq!(totals.duplicated, 2);
    }
}
