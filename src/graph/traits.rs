use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Trait representing a weighted directed graph keyed by arbitrary node identifiers
pub trait Graph<N, W>: Debug
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Copy + Debug,
{
    /// Returns the number of declared nodes (nodes with an adjacency entry)
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a node.
    ///
    /// A node the graph has never declared yields no edges.
    fn outgoing_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a>
    where
        N: 'a,
        W: 'a;

    /// Returns true if the node has an adjacency entry
    fn has_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}

/// Trait for building a graph before it is queried
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Copy + Debug,
{
    /// Declares a node; returns false if it was already declared
    fn add_node(&mut self, node: N) -> bool;

    /// Adds or overwrites a directed edge. Only `from` becomes declared.
    fn add_edge(&mut self, from: N, to: N, weight: W);

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;
}

/// Edge weights the search can accumulate into path costs.
///
/// `checked_extend` returns `None` when the sum is not representable; such a
/// candidate is treated as unreachable instead of wrapping or panicking.
pub trait PathWeight: Zero + Copy + Ord + Debug {
    fn checked_extend(self, edge: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl PathWeight for $t {
                fn checked_extend(self, edge: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &edge)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Float sums saturate to infinity, which still orders above every finite cost.
impl PathWeight for OrderedFloat<f32> {
    fn checked_extend(self, edge: Self) -> Option<Self> {
        Some(self + edge)
    }
}

impl PathWeight for OrderedFloat<f64> {
    fn checked_extend(self, edge: Self) -> Option<Self> {
        Some(self + edge)
    }
}
