//! FIFO frontier for breadth-first search.

use std::collections::VecDeque;

/// Strict first-in first-out queue of states awaiting expansion.
///
/// Ownership moves in on [`enqueue`](Self::enqueue) and back out on
/// [`dequeue`](Self::dequeue). Dropping the frontier drops whatever is
/// still queued.
///
/// # Example
///
/// ```
/// use gatesolver_solver::frontier::Frontier;
///
/// let mut frontier = Frontier::new();
/// frontier.enqueue("a");
/// frontier.enqueue("b");
///
/// assert_eq!(frontier.dequeue(), Some("a"));
/// assert_eq!(frontier.len(), 1);
/// assert_eq!(frontier.peak_len(), 2);
/// ```
#[derive(Debug)]
pub struct Frontier<T> {
    queue: VecDeque<T>,
    peak: usize,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            peak: 0,
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.queue.push_back(item);
        self.peak = self.peak.max(self.queue.len());
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.queue.front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Largest length reached so far.
    #[inline]
    pub fn peak_len(&self) -> usize {
        self.peak
    }

    /// Drops every queued item.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        for i in 0..5 {
            frontier.enqueue(i);
        }
        assert_eq!(frontier.peek(), Some(&0));
        let drained: Vec<_> = std::iter::from_fn(|| frontier.dequeue()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(frontier.is_empty());
        assert_eq!(frontier.dequeue(), None);
    }

    #[test]
    fn test_clear_releases_items() {
        let shared = Arc::new(());
        let mut frontier = Frontier::new();
        frontier.enqueue(Arc::clone(&shared));
        frontier.enqueue(Arc::clone(&shared));
        assert_eq!(Arc::strong_count(&shared), 3);

        frontier.clear();
        assert_eq!(Arc::strong_count(&shared), 1);
        assert_eq!(frontier.peak_len(), 2);
    }

    #[test]
    fn test_drop_releases_items() {
        let shared = Arc::new(());
        {
            let mut frontier = Frontier::new();
            frontier.enqueue(Arc::clone(&shared));
        }
        assert_eq!(Arc::strong_count(&shared), 1);
    }
}
