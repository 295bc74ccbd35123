use std::time::{Duration, Instant};
use rand::prelude::*;
use rand::rngs::StdRng;
use shortest_route::graph::generators::generate_random;
use shortest_route::graph::{AdjacencyGraph, Graph};
use shortest_route::{find_shortest_paths, Dijkstra};

const QUERIES_PER_SIZE: usize = 200;

// Times a fixed set of random point-to-point queries on one graph
fn benchmark_queries(
    graph: &AdjacencyGraph<usize, u64>,
    queries: &[(usize, usize)],
) -> (Duration, usize, usize) {
    let dijkstra = Dijkstra::new();
    let mut reachable = 0;
    let mut settled = 0;

    let start = Instant::now();
    for (source, target) in queries {
        let (result, stats) = dijkstra.search(graph, source, target);
        if result.is_reachable() {
            reachable += 1;
        }
        settled += stats.nodes_settled;
    }

    (start.elapsed(), reachable, settled)
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per node
    let edge_factor = 3.0;

    println!("=====================================================");
    println!("Benchmark: point-to-point Dijkstra");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("Queries per graph: {}", QUERIES_PER_SIZE);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(7);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let graph = generate_random(size, edge_factor, 100, size as u64);
        let queries: Vec<(usize, usize)> = (0..QUERIES_PER_SIZE)
            .map(|_| (rng.gen_range(0..size), rng.gen_range(0..size)))
            .collect();

        println!("\nGraph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let (sequential, reachable, settled) = benchmark_queries(&graph, &queries);
        let start = Instant::now();
        let parallel_results = find_shortest_paths(&graph, &queries);
        let parallel = start.elapsed();
        debug_assert_eq!(
            parallel_results.iter().filter(|r| r.is_reachable()).count(),
            reachable
        );

        println!(
            "  - {} of {} queries reachable, {:.1} nodes settled per query",
            reachable,
            queries.len(),
            settled as f64 / queries.len() as f64
        );
        println!("  - sequential {:?}, parallel {:?}", sequential, parallel);

        results.push((size, sequential, parallel));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10}",
        "Nodes", "Sequential (ms)", "Parallel (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for (size, sequential, parallel) in &results {
        let speedup = sequential.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            sequential.as_millis(),
            parallel.as_millis(),
            speedup
        );
    }
}
