//! Lexicographic k-combinations of piece indices.

use smallvec::SmallVec;

use gatesolver_core::MAX_PIECES;

/// One combination of piece indices, ascending.
pub type Combination = SmallVec<[usize; MAX_PIECES]>;

/// Iterates all `k`-element subsets of `0..n` as ascending tuples in
/// lexicographic order. Yields nothing when `k == 0` or `k > n`.
///
/// # Example
///
/// ```
/// use gatesolver_solver::index::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).map(|c| c.to_vec()).collect();
/// assert_eq!(all, vec![
///     vec![0, 1], vec![0, 2], vec![0, 3],
///     vec![1, 2], vec![1, 3], vec![2, 3],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    current: Option<Combination>,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        let current = (k > 0 && k <= n).then(|| (0..k).collect());
        Self { n, current }
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current.take()?;
        let mut next = out.clone();
        let k = next.len();

        // Rightmost slot that can still advance.
        let advance = (0..k).rev().find(|&i| next[i] < self.n - k + i);
        if let Some(i) = advance {
            next[i] += 1;
            for j in i + 1..k {
                next[j] = next[j - 1] + 1;
            }
            self.current = Some(next);
        }
        Some(out)
    }
}
