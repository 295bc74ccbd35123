use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Zero;
use ordered_float::OrderedFloat;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::io::Read;

/// A directed graph stored as a mapping of mappings: node -> (neighbor -> weight)
///
/// Neighbors do not have to be declared as outer keys. Such a node is still a
/// valid endpoint; it simply has no outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Copy + Debug,
{
    adjacency: HashMap<N, HashMap<N, W>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Copy + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `nodes` declared nodes
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyGraph {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Every node the graph knows about: declared keys plus referenced neighbors
    pub fn nodes(&self) -> HashSet<&N> {
        let mut nodes: HashSet<&N> = self.adjacency.keys().collect();
        for neighbors in self.adjacency.values() {
            nodes.extend(neighbors.keys());
        }
        nodes
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Copy + Debug + PartialOrd,
{
    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> Result<()> {
        for (from, neighbors) in &self.adjacency {
            for (to, weight) in neighbors {
                if *weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: format!("{:?}", from),
                        to: format!("{:?}", to),
                        weight: format!("{:?}", weight),
                    });
                }
            }
        }
        Ok(())
    }
}

impl AdjacencyGraph<String, OrderedFloat<f64>> {
    /// Parses a JSON object of objects, e.g. `{"A": {"B": 1.5}, "B": {}}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, f64>> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Same as [`AdjacencyGraph::from_json_str`], reading from any source
    pub fn from_json_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    pub fn from_raw(raw: HashMap<String, HashMap<String, f64>>) -> Self {
        let adjacency = raw
            .into_iter()
            .map(|(node, neighbors)| {
                let neighbors: HashMap<String, OrderedFloat<f64>> = neighbors
                    .into_iter()
                    .map(|(neighbor, weight)| (neighbor, OrderedFloat(weight)))
                    .collect();
                (node, neighbors)
            })
            .collect();
        AdjacencyGraph { adjacency }
    }
}

impl<N, W> Default for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> From<HashMap<N, HashMap<N, W>>> for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Copy + Debug,
{
    fn from(adjacency: HashMap<N, HashMap<N, W>>) -> Self {
        AdjacencyGraph { adjacency }
    }
}

impl<N, W> FromIterator<(N, N, W)> for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Copy + Debug,
{
    fn from_iter<I: IntoIterator<Item = (N, N, W)>>(edges: I) -> Self {
        let mut graph = AdjacencyGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Copy + Debug,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a>
    where
        N: 'a,
        W: 'a,
    {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().map(|(neighbor, weight)| (neighbor, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
    }
}

impl<N, W> MutableGraph<N, W> for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Zero + Copy + Debug,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashMap::new());
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) {
        self.adjacency.entry(from).or_default().insert(to, weight);
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        self.adjacency
            .get_mut(from)
            .map_or(false, |edges| edges.remove(to).is_some())
    }
}
