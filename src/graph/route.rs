use log::{debug, warn};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

use crate::graph::model::{Airport, DestinationCatalog, Fare};
use crate::graph::traits::Graph;
use crate::graph::view::FilteredView;
use crate::{Error, Result};

/// Edge weight used throughout the route graph: the fare price
pub type Cost = OrderedFloat<f64>;

/// Undirected fare network built once from the catalog and the fare table
///
/// Vertices are numbered in ascending airport code order. Each unordered
/// airport pair carries at most one fare; a later fare for the same pair
/// replaces the earlier price.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    /// Airports indexed by vertex id
    airports: Vec<Airport>,

    /// Airport code -> vertex id
    index: HashMap<String, usize>,

    /// Neighbours of each vertex: vertex_id -> [(neighbour, price)], sorted by neighbour
    adjacency: Vec<Vec<(usize, Cost)>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl RouteGraph {
    /// Builds the graph from loader output
    ///
    /// Fails with [`Error::Configuration`] when the catalog is empty. A missing
    /// fare table yields a graph with no edges. Fares referencing unknown
    /// airports, or with a negative or non-finite price, are dropped with a
    /// warning.
    pub fn new(catalog: &DestinationCatalog, fares: Option<&[Fare]>) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::Configuration(
                "destination catalog is missing or empty".to_string(),
            ));
        }

        let mut graph = RouteGraph::with_airports(catalog);

        match fares {
            Some(fares) => {
                for fare in fares {
                    graph.add_fare(fare);
                }
            }
            None => warn!("No fare table supplied; the route graph has no connections"),
        }

        for neighbours in &mut graph.adjacency {
            neighbours.sort_by_key(|(target, _)| *target);
        }

        debug!(
            "Route graph built with {} airports and {} fares",
            graph.airports.len(),
            graph.edge_count
        );
        Ok(graph)
    }

    fn with_airports(catalog: &DestinationCatalog) -> Self {
        let airports: Vec<Airport> = catalog
            .iter()
            .map(|(code, destination)| Airport {
                code: code.clone(),
                name: destination.name.clone(),
                visa_required: destination.visa_required,
            })
            .collect();

        let index = airports
            .iter()
            .enumerate()
            .map(|(id, airport)| (airport.code.clone(), id))
            .collect();

        RouteGraph {
            adjacency: vec![Vec::new(); airports.len()],
            airports,
            index,
            edge_count: 0,
        }
    }

    fn add_fare(&mut self, fare: &Fare) -> bool {
        let (from, to) = match (self.index.get(&fare.origin), self.index.get(&fare.destination)) {
            (Some(&from), Some(&to)) => (from, to),
            _ => {
                warn!(
                    "Fare {} -> {} not added: one or both airports are not in the destination catalog",
                    fare.origin, fare.destination
                );
                return false;
            }
        };

        if !fare.price.is_finite() || fare.price < 0.0 {
            warn!(
                "Fare {} -> {} not added: invalid price {}",
                fare.origin, fare.destination, fare.price
            );
            return false;
        }
        let price = OrderedFloat(fare.price);

        // Check if edge already exists and update it if it does
        if let Some(previous) = self.replace_weight(from, to, price) {
            self.replace_weight(to, from, price);
            debug!(
                "Fare {} -> {} replaced: {} -> {}",
                fare.origin, fare.destination, previous, price
            );
            return true;
        }

        self.adjacency[from].push((to, price));
        if from != to {
            self.adjacency[to].push((from, price));
        }
        self.edge_count += 1;
        true
    }

    fn replace_weight(&mut self, from: usize, to: usize, weight: Cost) -> Option<Cost> {
        self.adjacency[from]
            .iter_mut()
            .find(|(target, _)| *target == to)
            .map(|edge| std::mem::replace(&mut edge.1, weight))
    }

    /// Returns the visa-filtered view of this graph
    ///
    /// A visa holder sees every airport. Without a visa, airports that require
    /// one are removed together with all of their fares.
    pub fn filtered_view(&self, has_visa: bool) -> FilteredView<'_> {
        FilteredView::new(self, has_visa)
    }

    /// All airports, indexed by vertex id
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.index_of(code).map(|id| &self.airports[id])
    }

    pub fn airport_at(&self, vertex: usize) -> Option<&Airport> {
        self.airports.get(vertex)
    }

    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }

    /// Neighbours of a vertex with the fare to each, ignoring any filter
    pub fn neighbours(&self, vertex: usize) -> &[(usize, Cost)] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Price of the direct fare between two airports, in either direction
    pub fn price_between(&self, origin: &str, destination: &str) -> Option<f64> {
        let from = self.index_of(origin)?;
        let to = self.index_of(destination)?;
        self.get_edge_weight(from, to).map(OrderedFloat::into_inner)
    }
}

impl Graph<Cost> for RouteGraph {
    fn vertex_count(&self) -> usize {
        self.airports.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, Cost)> + '_> {
        Box::new(self.neighbours(vertex).iter().copied())
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.airports.len()
    }
}
