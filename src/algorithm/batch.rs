use std::fmt::Debug;
use std::hash::Hash;
use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::PathResult;
use crate::graph::{Graph, PathWeight};

/// Answers independent `(start, end)` queries in parallel against one graph.
///
/// Every query owns its own search tables, so the only shared state is the
/// read-only graph. Results are returned in query order.
pub fn find_shortest_paths<N, W, G>(graph: &G, queries: &[(N, N)]) -> Vec<PathResult<N, W>>
where
    N: Clone + Eq + Hash + Ord + Debug + Send + Sync,
    W: PathWeight + Send + Sync,
    G: Graph<N, W> + Sync + ?Sized,
{
    let dijkstra = Dijkstra::new();
    log::debug!("Running {} route queries in parallel", queries.len());

    queries
        .par_iter()
        .map(|(start, end)| dijkstra.search(graph, start, end).0)
        .collect()
}
