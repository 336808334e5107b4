//! Duplicate and novelty indices keyed by packed states.

mod combinations;
mod novelty;
mod radix;

pub use combinations::{Combination, Combinations};
pub use novelty::NoveltyTable;
pub use radix::RadixTree;
