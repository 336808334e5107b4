//! Accepts every legal successor.

use gatesolver_core::PuzzleState;

use super::Acceptor;

/// Plain breadth-first search: no pruning at all.
///
/// Revisits states freely, so it never terminates on a puzzle whose
/// reachable state graph has a cycle and no solution.
///
/// # Example
///
/// ```
/// use gatesolver_solver::acceptor::{Acceptor, AlwaysAcceptor};
///
/// let acceptor = AlwaysAcceptor::new();
/// assert_eq!(acceptor.acceptor_type_name(), "Always");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAcceptor;

impl AlwaysAcceptor {
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for AlwaysAcceptor {
    fn is_accepted(&mut self, _state: &PuzzleState) -> bool {
        true
    }

    fn acceptor_type_name(&self) -> &'static str {
        "Always"
    }
}
