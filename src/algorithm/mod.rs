pub mod traits;
pub mod dijkstra;
pub mod bfs;
pub mod yen;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
