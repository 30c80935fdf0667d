use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over non-negative edge weights
///
/// Equal tentative distances are settled in ascending vertex order, and a
/// vertex only changes predecessor on a strict improvement, so among routes of
/// equal cost the first one discovered wins.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];

        // Distance to source is 0
        distances[source] = Some(W::zero());

        let mut queue = MinQueue::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: u was already settled through a cheaper route
            if settled[u] {
                continue;
            }
            settled[u] = true;

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                if settled[v] {
                    continue;
                }
                let new_dist = dist_u + weight;

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
