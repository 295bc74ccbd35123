//! Shortest Route - point-to-point shortest paths on weighted directed graphs
//!
//! The engine is Dijkstra's algorithm with lazy deletion: the frontier is a plain
//! binary heap that may hold superseded entries, and a visited set discards them
//! when they surface. The search stops as soon as the target is popped.
//!
//! Edge weights must be non-negative. This is a caller precondition; the engine
//! does not check it (see [`graph::AdjacencyGraph::validate_non_negative`]).

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

/// Re-export main types for convenient use
pub use algorithm::{
    batch::find_shortest_paths,
    dijkstra::{find_shortest_path, Dijkstra},
    PathAlgorithm, PathResult, SearchStats,
};
pub use data_structures::Distance;
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Invalid graph document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
