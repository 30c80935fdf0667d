use std::collections::VecDeque;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Breadth-first search counting every edge as one hop
///
/// Edge weights are ignored; `distances` holds hop counts. Neighbours are
/// visited in the order the graph yields them.
#[derive(Debug, Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BreadthFirst
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BreadthFirst"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut queue = VecDeque::new();

        distances[source] = Some(W::zero());
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            let hops = match distances[u] {
                Some(hops) => hops + W::one(),
                None => continue,
            };

            for (v, _) in graph.outgoing_edges(u) {
                if distances[v].is_some() {
                    continue;
                }
                distances[v] = Some(hops);
                predecessors[v] = Some(u);
                queue.push_back(v);
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
