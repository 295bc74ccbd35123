use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Cost of reaching a node: either a finite sum of edge weights or unreachable.
///
/// `Finite(_)` always orders before `Infinite`, so the derived ordering can be
/// compared directly during relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Copy> Distance<W> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, or `None` when unreachable
    pub fn finite(&self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Infinite => None,
        }
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// Best-known distance per node. Nodes without an entry read as `Infinite`.
#[derive(Debug, Clone)]
pub struct DistanceTable<N, W>
where
    N: Eq + Hash,
{
    best: HashMap<N, W>,
}

impl<N, W> DistanceTable<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        DistanceTable {
            best: HashMap::new(),
        }
    }

    /// Current best distance, `Infinite` if the node was never reached
    pub fn get(&self, node: &N) -> Distance<W> {
        self.best
            .get(node)
            .map_or(Distance::Infinite, |w| Distance::Finite(*w))
    }

    /// Stores `candidate` if it strictly improves on the current entry.
    /// Returns true when the table changed.
    pub fn relax(&mut self, node: &N, candidate: W) -> bool {
        if Distance::Finite(candidate) < self.get(node) {
            self.best.insert(node.clone(), candidate);
            true
        } else {
            false
        }
    }
}

impl<N, W> Default for DistanceTable<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
