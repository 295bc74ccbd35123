use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-ordered frontier of `(tentative distance, node)` entries.
///
/// There is no decrease-key: a node whose distance improves is pushed again
/// and the older entry stays behind. Callers discard stale entries on pop.
/// Entries with equal distance come out in the node's `Ord` order.
#[derive(Debug)]
pub struct Frontier<N, W>
where
    N: Ord + Debug,
    W: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(W, N)>>,
    pushes: usize,
}

impl<N, W> Frontier<N, W>
where
    N: Ord + Debug,
    W: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            pushes: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes since creation
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn push(&mut self, distance: W, node: N) {
        self.pushes += 1;
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(W, N)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}

impl<N, W> Default for Frontier<N, W>
where
    N: Ord + Debug,
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
