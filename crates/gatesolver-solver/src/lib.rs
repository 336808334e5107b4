//! gatesolver solver - shortest-path search over puzzle states
//!
//! This crate provides:
//! - the bit-packed [`codec`] for piece positions
//! - radix-tree duplicate and novelty [`index`]es
//! - a FIFO [`frontier`] and the breadth-first [`search`] drivers
//! - [`acceptor`]s that turn one driver into three strategies
//! - the [`Solver`] entry point and its [`SolveReport`]

pub mod acceptor;
pub mod codec;
pub mod frontier;
pub mod index;
pub mod report;
pub mod search;
pub mod solver;
pub mod stats;

pub use acceptor::{Acceptor, AlwaysAcceptor, DuplicateStateAcceptor, NoveltyAcceptor};
pub use codec::{bits_for, packed_size, BitVector, PackedStateKey, StateCodec};
pub use frontier::Frontier;
pub use index::{Combination, Combinations, NoveltyTable, RadixTree};
pub use report::{SolveReport, SolveStatus};
pub use search::{BreadthFirstSearch, IteratedWidthOutcome, IteratedWidthSearch, SearchOutcome};
pub use solver::Solver;
pub use stats::{PhaseStats, SolverStats};
