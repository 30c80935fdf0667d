//! Metro Travel - route recommendations over an airport fare network
//!
//! The core of the crate is a route-graph engine: an undirected weighted graph
//! built from a destination catalog and a fare table, visa-filtered views of
//! that graph, and three path queries over a view:
//!
//! - the cheapest route (Dijkstra over fare prices),
//! - the route with the fewest stops (breadth-first search),
//! - the k cheapest distinct simple routes (Yen-style deviation search).
//!
//! Loading delimited files and presenting results live in the outer
//! [`loader`], [`render`], [`report`] and [`config`] modules and in the
//! `metro_travel` binary; the core only ever sees already-structured records.

use std::fmt;

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod finder;
pub mod graph;
pub mod loader;
pub mod render;
pub mod report;

pub use algorithm::{
    bfs::BreadthFirst, dijkstra::Dijkstra, yen::KShortestPaths, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use config::{OutputFormat, QueryMode, TravelConfig};
pub use finder::{CostRoute, PathFinder, StopsRoute};
/// Re-export main types for convenient use
pub use graph::{Airport, Cost, Destination, DestinationCatalog, Fare, FilteredView, RouteGraph};

/// Why an airport cannot be used in a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unreachable {
    /// The airport exists but the traveller holds no visa for it
    VisaRequired { name: String },
    /// The code is not part of the destination catalog
    UnknownAirport,
}

impl fmt::Display for Unreachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unreachable::VisaRequired { name } => write!(f, "{} requires a visa", name),
            Unreachable::UnknownAirport => write!(f, "airport does not exist"),
        }
    }
}

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Airport {code} is not reachable: {reason}")]
    NotReachable { code: String, reason: Unreachable },

    #[error("No route found between {origin} and {destination}")]
    NoPath { origin: String, destination: String },

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
