use crate::graph::{AdjacencyGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a seeded random directed graph with `n` nodes and roughly
/// `edge_factor * n` edges carrying integer weights in `0..=max_weight`.
///
/// Every node `0..n` is declared, so isolated nodes still count. Self-loops
/// and zero weights are allowed; the engine has to cope with both.
pub fn generate_random(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    seed: u64,
) -> AdjacencyGraph<usize, u64> {
    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a `width` x `height` grid with 8-connectivity.
///
/// Cardinal moves cost 1.0 and diagonal moves 1.4. Cells listed in
/// `blocked` (as `(x, y)`) get neither incoming nor outgoing edges.
pub fn generate_grid(
    width: usize,
    height: usize,
    blocked: &[(usize, usize)],
) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);
    let is_blocked = |x: usize, y: usize| blocked.contains(&(x, y));

    let directions = [
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            graph.add_node(node);
            if is_blocked(x, y) {
                continue;
            }

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !is_blocked(nx, ny) {
                    graph.add_edge(node, ny * width + nx, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}
