use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing a weighted graph addressed by dense vertex indices
///
/// Undirected graphs report every edge from both endpoints, so
/// `outgoing_edges(a)` yields `b` whenever `outgoing_edges(b)` yields `a`.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the size of the vertex index space
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the edges leaving a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Sums the edge weights along `path`, or `None` if a hop has no edge
    fn path_weight(&self, path: &[usize]) -> Option<W> {
        if let Some(&first) = path.first() {
            if !self.has_vertex(first) {
                return None;
            }
        }
        path.windows(2).try_fold(W::zero(), |total, hop| {
            self.get_edge_weight(hop[0], hop[1]).map(|weight| total + weight)
        })
    }
}
