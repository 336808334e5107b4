//! Per-size novelty tables for iterated width search.

use std::mem::size_of;

use gatesolver_core::PuzzleState;

use super::combinations::Combinations;
use super::radix::RadixTree;
use crate::codec::StateCodec;

/// Remembers every piece combination of sizes `1..=width` seen so far.
///
/// A state is novel when at least one of its combinations, at any size,
/// has not been recorded yet. Combinations are the ascending piece-id
/// tuples produced by [`Combinations`], each packed with
/// [`StateCodec::encode_subset`].
#[derive(Debug, Clone)]
pub struct NoveltyTable {
    codec: StateCodec,
    // trees[s - 1] holds combinations of size s.
    trees: Vec<RadixTree>,
}

impl NoveltyTable {
    pub fn new(codec: StateCodec, width: usize) -> Self {
        Self {
            codec,
            trees: (0..width).map(|_| RadixTree::new()).collect(),
        }
    }

    /// Largest combination size tracked.
    #[inline]
    pub fn width(&self) -> usize {
        self.trees.len()
    }

    /// The index for combinations of `size` pieces.
    pub fn tree(&self, size: usize) -> Option<&RadixTree> {
        size.checked_sub(1).and_then(|i| self.trees.get(i))
    }

    /// Returns true if `state` has a combination not recorded yet.
    pub fn is_novel(&self, state: &PuzzleState) -> bool {
        let n = state.piece_count();
        self.trees.iter().enumerate().any(|(i, tree)| {
            Combinations::new(n, i + 1)
                .any(|c| !tree.contains(self.codec.encode_subset(state, &c).bits()))
        })
    }

    /// Records every combination of `state` at every size. Returns true if
    /// any of them was new, i.e. the state was novel before the call.
    pub fn record(&mut self, state: &PuzzleState) -> bool {
        let n = state.piece_count();
        let mut novel = false;
        for (i, tree) in self.trees.iter_mut().enumerate() {
            for c in Combinations::new(n, i + 1) {
                novel |= tree.insert(self.codec.encode_subset(state, &c).bits());
            }
        }
        novel
    }

    /// Bytes held by all size indices.
    pub fn memory_usage(&self) -> usize {
        size_of::<Self>() + self.trees.iter().map(RadixTree::memory_usage).sum::<usize>()
    }
}
