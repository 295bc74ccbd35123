use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::traits::reconstruct_path;
use crate::algorithm::{PathAlgorithm, PathResult, SearchStats};
use crate::data_structures::{Distance, DistanceTable, Frontier};
use crate::graph::{Graph, PathWeight};

/// Early-exit Dijkstra with lazy deletion
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs one query and also reports what the search did.
    ///
    /// Neither `start` nor `end` has to be declared in the graph. An undeclared
    /// node has no outgoing edges; `start` still begins at distance zero.
    pub fn search<N, W, G>(
        &self,
        graph: &G,
        start: &N,
        end: &N,
    ) -> (PathResult<N, W>, SearchStats)
    where
        N: Clone + Eq + Hash + Ord + Debug,
        W: PathWeight,
        G: Graph<N, W> + ?Sized,
    {
        let mut distances: DistanceTable<N, W> = DistanceTable::new();
        let mut predecessors: HashMap<N, N> = HashMap::new();
        let mut visited: HashSet<N> = HashSet::new();
        let mut frontier = Frontier::new();
        let mut stats = SearchStats::default();

        distances.relax(start, W::zero());
        frontier.push(W::zero(), start.clone());

        while let Some((current_distance, current)) = frontier.pop() {
            if &current == end {
                let path = reconstruct_path(&predecessors, start, &current);
                stats.frontier_pushes = frontier.pushes();
                log::debug!(
                    "Route {:?} -> {:?}: cost {:?} over {} hops ({} settled)",
                    start,
                    end,
                    current_distance,
                    path.len() - 1,
                    stats.nodes_settled
                );
                let result = PathResult {
                    distance: Distance::Finite(current_distance),
                    path,
                };
                return (result, stats);
            }

            // A cheaper entry for this node was already expanded
            if visited.contains(&current) {
                stats.stale_entries_skipped += 1;
                continue;
            }

            log::trace!("Settling {:?} at {:?}", current, current_distance);
            visited.insert(current.clone());
            stats.nodes_settled += 1;

            for (neighbor, weight) in graph.outgoing_edges(&current) {
                if visited.contains(neighbor) {
                    continue;
                }

                let Some(candidate) = current_distance.checked_extend(weight) else {
                    log::trace!("Cost overflow on {:?} -> {:?}", current, neighbor);
                    continue;
                };
                if distances.relax(neighbor, candidate) {
                    predecessors.insert(neighbor.clone(), current.clone());
                    frontier.push(candidate, neighbor.clone());
                    stats.edges_relaxed += 1;
                }
            }
        }

        stats.frontier_pushes = frontier.pushes();
        log::debug!(
            "No route {:?} -> {:?} ({} settled)",
            start,
            end,
            stats.nodes_settled
        );
        (PathResult::unreachable(), stats)
    }
}

impl<N, W, G> PathAlgorithm<N, W, G> for Dijkstra
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: PathWeight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, graph: &G, start: &N, end: &N) -> PathResult<N, W> {
        self.search(graph, start, end).0
    }
}

/// Cheapest `(cost, path)` from `start` to `end`.
///
/// Returns `(Distance::Infinite, [])` when `end` cannot be reached.
pub fn find_shortest_path<N, W, G>(graph: &G, start: &N, end: &N) -> (Distance<W>, Vec<N>)
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: PathWeight,
    G: Graph<N, W> + ?Sized,
{
    Dijkstra::new().search(graph, start, end).0.into_parts()
}
