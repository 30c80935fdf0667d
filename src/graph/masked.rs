use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::graph::traits::Graph;

/// A graph with some vertices and undirected edges temporarily hidden
///
/// Used by the k-shortest-path search to force deviations from routes it has
/// already accepted without touching the underlying graph.
#[derive(Debug)]
pub struct MaskedGraph<'g, G> {
    inner: &'g G,
    removed_vertices: HashSet<usize>,
    /// Stored as (min, max) so both directions are hidden together
    removed_edges: HashSet<(usize, usize)>,
}

impl<'g, G> MaskedGraph<'g, G> {
    pub fn new(inner: &'g G) -> Self {
        MaskedGraph {
            inner,
            removed_vertices: HashSet::new(),
            removed_edges: HashSet::new(),
        }
    }

    /// Hides a vertex and every edge touching it
    pub fn remove_vertex(&mut self, vertex: usize) {
        self.removed_vertices.insert(vertex);
    }

    /// Hides the edge between `a` and `b` in both directions
    pub fn remove_edge(&mut self, a: usize, b: usize) {
        self.removed_edges.insert((a.min(b), a.max(b)));
    }

    fn edge_removed(&self, a: usize, b: usize) -> bool {
        self.removed_edges.contains(&(a.min(b), a.max(b)))
    }
}

impl<'g, W, G> Graph<W> for MaskedGraph<'g, G>
where
    W: Float + Zero + Debug + Copy + 'static,
    G: Graph<W>,
{
    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> usize {
        let mut count = 0;
        for from in 0..self.inner.vertex_count() {
            count += <Self as Graph<W>>::outgoing_edges(self, from)
                .filter(|&(to, _)| from <= to)
                .count();
        }
        count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !<Self as Graph<W>>::has_vertex(self, vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(Graph::<W>::outgoing_edges(self.inner, vertex).filter(move |&(target, _)| {
            !self.removed_vertices.contains(&target) && !self.edge_removed(vertex, target)
        }))
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        Graph::<W>::has_vertex(self.inner, vertex) && !self.removed_vertices.contains(&vertex)
    }
}
