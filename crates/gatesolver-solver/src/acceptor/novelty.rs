//! Subset novelty pruning for iterated width.

use gatesolver_core::PuzzleState;

use super::Acceptor;
use crate::codec::StateCodec;
use crate::index::NoveltyTable;

/// Accepts a state when any of its piece combinations of size `1..=width`
/// has not been seen in this run.
///
/// Build a fresh acceptor for every width; indices are never shared
/// between widths.
#[derive(Debug, Clone)]
pub struct NoveltyAcceptor {
    table: NoveltyTable,
}

impl NoveltyAcceptor {
    pub fn new(codec: StateCodec, width: usize) -> Self {
        Self {
            table: NoveltyTable::new(codec, width),
        }
    }

    pub fn width(&self) -> usize {
        self.table.width()
    }

    pub fn table(&self) -> &NoveltyTable {
        &self.table
    }
}

impl Acceptor for NoveltyAcceptor {
    fn is_accepted(&mut self, state: &PuzzleState) -> bool {
        self.table.record(state)
    }

    fn phase_started(&mut self, root: &PuzzleState) {
        self.table.record(root);
    }

    fn memory_usage(&self) -> usize {
        self.table.memory_usage()
    }

    fn acceptor_type_name(&self) -> &'static str {
        "Novelty"
    }
}
