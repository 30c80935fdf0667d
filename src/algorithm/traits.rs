use log::warn;
use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `target`, if it was reached
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if result.distance(target).is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != result.source {
            if !visited.insert(current) {
                warn!("Cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            path.push(current);
            match result.predecessors[current] {
                Some(pred) => current = pred,
                // A reached vertex other than the source always has a predecessor
                None => return None,
            }
        }

        path.push(result.source);
        path.reverse();

        Some(path)
    }
}
