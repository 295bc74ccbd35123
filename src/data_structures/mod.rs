pub mod distance;
pub mod priority_queue;

pub use distance::{Distance, DistanceTable};
pub use priority_queue::Frontier;
