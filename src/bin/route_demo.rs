use ordered_float::OrderedFloat;
use shortest_route::graph::{AdjacencyGraph, MutableGraph};
use shortest_route::{find_shortest_path, Distance};
use std::env;
use std::fs::File;

type CityGraph = AdjacencyGraph<String, OrderedFloat<f64>>;

// Undirected road map, each road listed in both directions
fn sample_cities() -> CityGraph {
    let roads = [
        ("New York", "Boston", 215.0),
        ("New York", "Philadelphia", 95.0),
        ("Boston", "Montreal", 310.0),
        ("Philadelphia", "Washington DC", 140.0),
        ("Philadelphia", "Pittsburgh", 305.0),
        ("Washington DC", "Charlotte", 400.0),
        ("Pittsburgh", "Columbus", 185.0),
    ];

    let mut graph = AdjacencyGraph::new();
    for (a, b, miles) in roads {
        graph.add_edge(a.to_string(), b.to_string(), OrderedFloat(miles));
        graph.add_edge(b.to_string(), a.to_string(), OrderedFloat(miles));
    }
    graph
}

fn report(graph: &CityGraph, start: &str, end: &str) {
    println!("Finding shortest path from {} to {}...", start, end);
    let (distance, path) = find_shortest_path(graph, &start.to_string(), &end.to_string());

    match distance {
        Distance::Finite(cost) => {
            println!("Shortest Distance: {}", cost);
            println!("Path: {}", path.join(" -> "));
        }
        Distance::Infinite => println!("No path found between {} and {}", start, end),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            let cities = sample_cities();
            report(&cities, "New York", "Columbus");
            println!("{}", "-".repeat(20));
            report(&cities, "Boston", "Washington DC");
        }
        [start, end] => report(&sample_cities(), start, end),
        [start, end, path] => {
            let graph = CityGraph::from_json_reader(File::open(path)?)?;
            graph.validate_non_negative()?;
            report(&graph, start, end);
        }
        _ => {
            eprintln!("usage: route_demo [START END [GRAPH.json]]");
            std::process::exit(2);
        }
    }

    Ok(())
}
