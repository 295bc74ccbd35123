use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use serde::Serialize;

use crate::data_structures::Distance;
use crate::graph::{Graph, PathWeight};

/// Result of a point-to-point query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<N, W> {
    /// Total cost from start to end, `Infinite` if the end was never reached
    pub distance: Distance<W>,

    /// Nodes from start to end inclusive; empty when unreachable
    pub path: Vec<N>,
}

impl<N, W: Copy> PathResult<N, W> {
    pub fn unreachable() -> Self {
        PathResult {
            distance: Distance::Infinite,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    pub fn distance(&self) -> Distance<W> {
        self.distance
    }

    pub fn path(&self) -> &[N] {
        &self.path
    }

    /// Number of edges on the path
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The `(cost, path)` pair
    pub fn into_parts(self) -> (Distance<W>, Vec<N>) {
        (self.distance, self.path)
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped and expanded (finalized)
    pub nodes_settled: usize,
    /// Relaxations that improved a distance
    pub edges_relaxed: usize,
    /// Entries pushed onto the frontier, the seed included
    pub frontier_pushes: usize,
    /// Superseded frontier entries discarded on pop
    pub stale_entries_skipped: usize,
}

/// Trait for point-to-point shortest path algorithms
pub trait PathAlgorithm<N, W, G>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: PathWeight,
    G: Graph<N, W>,
{
    /// Find the cheapest path from `start` to `end`
    fn find_path(&self, graph: &G, start: &N, end: &N) -> PathResult<N, W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Walks the predecessor chain back from `target` and returns it start-first.
///
/// The chain ends at the first node without a predecessor, which must be
/// `start` for a well-formed search. The walk is bounded by the table size so a
/// corrupted table cannot loop forever.
pub fn reconstruct_path<N>(predecessors: &HashMap<N, N>, start: &N, target: &N) -> Vec<N>
where
    N: Clone + Eq + Hash + Debug,
{
    let mut path = vec![target.clone()];
    let mut current = target;

    while let Some(pred) = predecessors.get(current) {
        if path.len() > predecessors.len() {
            log::warn!("Predecessor chain from {:?} does not terminate", target);
            break;
        }
        path.push(pred.clone());
        current = pred;
    }

    debug_assert!(
        current == start,
        "predecessor chain rooted at {:?}, expected {:?}",
        current,
        start
    );

    path.reverse();
    path
}
