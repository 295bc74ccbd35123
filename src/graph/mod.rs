pub mod traits;
pub mod adjacency;
pub mod generators;

pub use traits::{Graph, MutableGraph, PathWeight};
pub use adjacency::AdjacencyGraph;
