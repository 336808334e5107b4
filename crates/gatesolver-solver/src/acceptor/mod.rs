//! Acceptors decide which legal successors enter the frontier.
//!
//! One breadth-first driver serves every strategy; the acceptor is the
//! only part that differs between them.

mod always;
mod duplicate_state;
mod novelty;

use std::fmt::Debug;

use gatesolver_core::PuzzleState;

pub use always::AlwaysAcceptor;
pub use duplicate_state::DuplicateStateAcceptor;
pub use novelty::NoveltyAcceptor;

/// Trait for accepting or rejecting successor states.
pub trait Acceptor: Send + Debug {
    /// Returns true if `state` should be enqueued. Acceptors that keep an
    /// index record the state as part of the same call.
    fn is_accepted(&mut self, state: &PuzzleState) -> bool;

    /// Called once with the root before the first expansion.
    fn phase_started(&mut self, _root: &PuzzleState) {}

    /// Bytes held by the acceptor's index.
    fn memory_usage(&self) -> usize {
        0
    }

    fn acceptor_type_name(&self) -> &'static str;
}
