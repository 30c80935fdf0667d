use log::trace;
use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::MinQueue;
use crate::graph::{Graph, MaskedGraph};
use crate::{Error, Result};

/// A loopless path together with its total weight
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath<W> {
    pub cost: W,
    pub vertices: Vec<usize>,
}

/// Yen's k-shortest loopless paths
///
/// The best path comes from [`Dijkstra`]. Each further path is a deviation
/// from the last accepted one: for every spur vertex on it, the root prefix is
/// hidden along with the next edge of every accepted path sharing that root,
/// and Dijkstra runs again from the spur vertex. Deviations wait in a
/// min-priority queue keyed by total cost; ties go to the lexicographically
/// smaller vertex sequence.
#[derive(Debug, Clone, Copy)]
pub struct KShortestPaths {
    k: usize,
}

impl KShortestPaths {
    pub fn new(k: usize) -> Self {
        KShortestPaths { k }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns up to `k` distinct loopless paths from `source` to `target`,
    /// sorted by non-decreasing cost
    ///
    /// An empty vector means `target` cannot be reached. Fails only when
    /// `source` or `target` is not a vertex of `graph`.
    pub fn compute<W, G>(&self, graph: &G, source: usize, target: usize) -> Result<Vec<RankedPath<W>>>
    where
        W: Float + Zero + Debug + Copy + Ord + 'static,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        if self.k == 0 {
            return Ok(Vec::new());
        }

        let Some(best) = cheapest_path::<W, G>(graph, source, target)? else {
            return Ok(Vec::new());
        };

        let mut seen: HashSet<Vec<usize>> = HashSet::new();
        seen.insert(best.vertices.clone());
        let mut accepted = vec![best];
        let mut candidates: MinQueue<Vec<usize>, W> = MinQueue::new();

        while accepted.len() < self.k {
            let last = accepted[accepted.len() - 1].vertices.clone();

            for i in 0..last.len().saturating_sub(1) {
                let spur = last[i];
                let root = &last[..=i];

                let mut masked = MaskedGraph::new(graph);
                for path in &accepted {
                    if path.vertices.len() > i + 1 && path.vertices[..=i] == *root {
                        masked.remove_edge(path.vertices[i], path.vertices[i + 1]);
                    }
                }
                for &vertex in &root[..i] {
                    masked.remove_vertex(vertex);
                }

                let Some(spur_path) = cheapest_path::<W, _>(&masked, spur, target)? else {
                    continue;
                };

                let mut vertices = root[..i].to_vec();
                vertices.extend(spur_path.vertices);

                // Summed over the whole path so the cost matches a hop-by-hop total
                let Some(cost) = graph.path_weight(&vertices) else {
                    continue;
                };

                if seen.insert(vertices.clone()) {
                    trace!("Deviation at vertex {} gives candidate {:?}", spur, vertices);
                    candidates.push(vertices, cost);
                }
            }

            match candidates.pop() {
                Some((vertices, cost)) => accepted.push(RankedPath { cost, vertices }),
                None => break,
            }
        }

        Ok(accepted)
    }
}

fn cheapest_path<W, G>(graph: &G, source: usize, target: usize) -> Result<Option<RankedPath<W>>>
where
    W: Float + Zero + Debug + Copy + Ord + 'static,
    G: Graph<W>,
{
    let dijkstra = Dijkstra::new();
    let result = <Dijkstra as ShortestPathAlgorithm<W, G>>::compute_shortest_paths(&dijkstra, graph, source)?;

    let Some(cost) = result.distance(target) else {
        return Ok(None);
    };
    let path = <Dijkstra as ShortestPathAlgorithm<W, G>>::get_path(&dijkstra, &result, target);

    Ok(path.map(|vertices| RankedPath { cost, vertices }))
}
