pub mod traits;
pub mod dijkstra;
pub mod batch;

pub use traits::{PathAlgorithm, PathResult, SearchStats};
