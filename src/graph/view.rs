use ordered_float::OrderedFloat;

use crate::graph::model::Airport;
use crate::graph::route::{Cost, RouteGraph};
use crate::graph::traits::Graph;
use crate::{Error, Result, Unreachable};

/// An undirected fare between two airports of a view, listed once
#[derive(Debug, Clone, PartialEq)]
pub struct Connection<'a> {
    pub from: &'a Airport,
    pub to: &'a Airport,
    pub price: f64,
}

/// Read-only subgraph of a [`RouteGraph`] under a visa assumption
///
/// Vertex ids are those of the underlying graph; excluded airports simply
/// report `has_vertex == false` and never show up as neighbours.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    graph: &'a RouteGraph,
    has_visa: bool,
    included: Vec<bool>,
    edge_count: usize,
}

impl<'a> FilteredView<'a> {
    pub(crate) fn new(graph: &'a RouteGraph, has_visa: bool) -> Self {
        let included: Vec<bool> = graph
            .airports()
            .iter()
            .map(|airport| has_visa || !airport.visa_required)
            .collect();

        let edge_count = (0..included.len())
            .filter(|&from| included[from])
            .flat_map(move |from| graph.neighbours(from).iter().map(move |(to, _)| (from, *to)))
            .filter(|&(from, to)| from <= to && included[to])
            .count();

        FilteredView {
            graph,
            has_visa,
            included,
            edge_count,
        }
    }

    /// Whether this view assumes the traveller holds a visa
    pub fn has_visa(&self) -> bool {
        self.has_visa
    }

    pub fn contains(&self, code: &str) -> bool {
        self.graph
            .index_of(code)
            .map_or(false, |vertex| self.included[vertex])
    }

    /// Resolves an airport code to its vertex id in this view
    ///
    /// Fails with [`Error::NotReachable`] when the code is unknown or the
    /// airport was filtered out for lack of a visa.
    pub fn resolve(&self, code: &str) -> Result<usize> {
        let Some(vertex) = self.graph.index_of(code) else {
            return Err(Error::NotReachable {
                code: code.to_string(),
                reason: Unreachable::UnknownAirport,
            });
        };

        if !self.included[vertex] {
            let name = self.graph.airports()[vertex].name.clone();
            return Err(Error::NotReachable {
                code: code.to_string(),
                reason: Unreachable::VisaRequired { name },
            });
        }

        Ok(vertex)
    }

    /// Airports visible in this view, in vertex order
    pub fn airports(&self) -> impl Iterator<Item = &'a Airport> + '_ {
        let airports = self.graph.airports();
        self.included
            .iter()
            .enumerate()
            .filter(|(_, included)| **included)
            .map(move |(vertex, _)| &airports[vertex])
    }

    /// Fares visible in this view, each undirected fare listed once
    pub fn connections(&self) -> Vec<Connection<'a>> {
        let airports = self.graph.airports();
        let mut connections = Vec::with_capacity(self.edge_count);

        for from in (0..self.included.len()).filter(|&v| self.included[v]) {
            for &(to, price) in self.graph.neighbours(from) {
                if from <= to && self.included[to] {
                    connections.push(Connection {
                        from: &airports[from],
                        to: &airports[to],
                        price: price.into_inner(),
                    });
                }
            }
        }

        connections
    }

    /// Maps vertex ids back to airport codes
    pub fn codes(&self, path: &[usize]) -> Vec<String> {
        path.iter()
            .filter_map(|&vertex| self.graph.airport_at(vertex))
            .map(|airport| airport.code.clone())
            .collect()
    }

    /// Total price of a path given as airport codes, if every hop exists in this view
    pub fn route_cost(&self, codes: &[&str]) -> Option<f64> {
        let path = codes
            .iter()
            .map(|code| self.resolve(code).ok())
            .collect::<Option<Vec<_>>>()?;
        self.path_weight(&path).map(OrderedFloat::into_inner)
    }
}

impl Graph<Cost> for FilteredView<'_> {
    fn vertex_count(&self) -> usize {
        self.included.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, Cost)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.graph
                .neighbours(vertex)
                .iter()
                .copied()
                .filter(move |(target, _)| self.included[*target]),
        )
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.included.get(vertex).copied().unwrap_or(false)
    }
}
