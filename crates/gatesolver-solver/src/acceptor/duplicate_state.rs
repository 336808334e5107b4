//! Full-state memoization.

use gatesolver_core::PuzzleState;

use super::Acceptor;
use crate::codec::StateCodec;
use crate::index::RadixTree;

/// Rejects any state whose full packed key was accepted before.
///
/// Keys are recorded on acceptance, so the set of accepted states never
/// holds two states with the same piece positions.
#[derive(Debug, Clone)]
pub struct DuplicateStateAcceptor {
    codec: StateCodec,
    seen: RadixTree,
}

impl DuplicateStateAcceptor {
    pub fn new(codec: StateCodec) -> Self {
        Self {
            codec,
            seen: RadixTree::new(),
        }
    }

    /// Number of distinct states recorded.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

impl Acceptor for DuplicateStateAcceptor {
    fn is_accepted(&mut self, state: &PuzzleState) -> bool {
        self.seen.insert(self.codec.encode(state).bits())
    }

    fn phase_started(&mut self, root: &PuzzleState) {
        self.seen.insert(self.codec.encode(root).bits());
    }

    fn memory_usage(&self) -> usize {
        self.seen.memory_usage()
    }

    fn acceptor_type_name(&self) -> &'static str {
        "DuplicateState"
    }
}
