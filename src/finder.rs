//! Route queries over a visa-filtered view.
//!
//! [`PathFinder`] turns airport codes into vertex ids, runs the matching
//! algorithm and maps the answer back to codes. Failures are typed:
//! [`Error::NotReachable`] when an endpoint is outside the view and
//! [`Error::NoPath`] when both endpoints are present but disconnected.

use log::debug;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::algorithm::bfs::BreadthFirst;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::yen::KShortestPaths;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Cost, FilteredView, Graph};
use crate::{Error, Result};

/// A route priced by its total fare
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostRoute {
    pub cost: f64,
    pub path: Vec<String>,
}

/// A route measured in stops (edges traversed)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopsRoute {
    pub stops: usize,
    /// Total fare of the route found, for display next to the stop count
    pub cost: f64,
    pub path: Vec<String>,
}

/// Runs route queries against one [`FilteredView`]
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'v> {
    view: &'v FilteredView<'v>,
}

impl<'v> PathFinder<'v> {
    pub fn new(view: &'v FilteredView<'v>) -> Self {
        PathFinder { view }
    }

    pub fn view(&self) -> &'v FilteredView<'v> {
        self.view
    }

    /// Cheapest route from `origin` to `destination`
    pub fn shortest_path_by_cost(&self, origin: &str, destination: &str) -> Result<CostRoute> {
        let (source, target) = self.endpoints(origin, destination)?;

        let dijkstra = Dijkstra::new();
        let result = <Dijkstra as ShortestPathAlgorithm<Cost, FilteredView>>::compute_shortest_paths(
            &dijkstra, self.view, source,
        )?;
        let path = <Dijkstra as ShortestPathAlgorithm<Cost, FilteredView>>::get_path(
            &dijkstra, &result, target,
        );

        match (result.distance(target), path) {
            (Some(cost), Some(path)) => {
                debug!("Cheapest route {} -> {}: {} via {:?}", origin, destination, cost, path);
                Ok(CostRoute {
                    cost: cost.into_inner(),
                    path: self.view.codes(&path),
                })
            }
            _ => Err(no_path(origin, destination)),
        }
    }

    /// Route from `origin` to `destination` with the fewest stops
    pub fn shortest_path_by_stops(&self, origin: &str, destination: &str) -> Result<StopsRoute> {
        let (source, target) = self.endpoints(origin, destination)?;

        let bfs = BreadthFirst::new();
        let result = <BreadthFirst as ShortestPathAlgorithm<Cost, FilteredView>>::compute_shortest_paths(
            &bfs, self.view, source,
        )?;
        let path = <BreadthFirst as ShortestPathAlgorithm<Cost, FilteredView>>::get_path(
            &bfs, &result, target,
        )
        .ok_or_else(|| no_path(origin, destination))?;

        let cost = self
            .view
            .path_weight(&path)
            .map(OrderedFloat::into_inner)
            .ok_or_else(|| no_path(origin, destination))?;

        debug!("Fewest-stops route {} -> {}: {:?}", origin, destination, path);
        Ok(StopsRoute {
            stops: path.len() - 1,
            cost,
            path: self.view.codes(&path),
        })
    }

    /// Up to `k` cheapest distinct simple routes, cheapest first
    ///
    /// Never fails: unknown, filtered-out or disconnected endpoints give an
    /// empty vector.
    pub fn k_shortest_paths_by_cost(&self, origin: &str, destination: &str, k: usize) -> Vec<CostRoute> {
        let Ok((source, target)) = self.endpoints(origin, destination) else {
            debug!("No alternatives for {} -> {}: endpoint outside the view", origin, destination);
            return Vec::new();
        };

        match KShortestPaths::new(k).compute::<Cost, _>(self.view, source, target) {
            Ok(paths) => paths
                .into_iter()
                .map(|ranked| CostRoute {
                    cost: ranked.cost.into_inner(),
                    path: self.view.codes(&ranked.vertices),
                })
                .collect(),
            Err(err) => {
                debug!("No alternatives for {} -> {}: {}", origin, destination, err);
                Vec::new()
            }
        }
    }

    fn endpoints(&self, origin: &str, destination: &str) -> Result<(usize, usize)> {
        let source = self.view.resolve(origin)?;
        let target = self.view.resolve(destination)?;
        Ok((source, target))
    }
}

fn no_path(origin: &str, destination: &str) -> Error {
    Error::NoPath {
        origin: origin.to_string(),
        destination: destination.to_string(),
    }
}
