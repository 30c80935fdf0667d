use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog entry for one airport, keyed by its code in a [`DestinationCatalog`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub visa_required: bool,
}

impl Destination {
    pub fn new(name: impl Into<String>, visa_required: bool) -> Self {
        Destination {
            name: name.into(),
            visa_required,
        }
    }
}

/// Airport code -> destination. Inserting an existing code replaces it.
pub type DestinationCatalog = BTreeMap<String, Destination>;

/// A node of the route graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub visa_required: bool,
}

/// One row of the fare table: a priced direct flight, usable in both directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fare {
    pub origin: String,
    pub destination: String,
    pub price: f64,
}

impl Fare {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, price: f64) -> Self {
        Fare {
            origin: origin.into(),
            destination: destination.into(),
            price,
        }
    }
}
