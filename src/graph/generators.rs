use rand::prelude::*;
use std::collections::HashSet;

use crate::graph::model::{Destination, DestinationCatalog, Fare};

/// Code of the `i`-th generated airport ("A000", "A001", ...)
pub fn airport_code(i: usize) -> String {
    format!("A{:03}", i)
}

/// Generates a random fare network
///
/// Every airport gets roughly `fares_per_airport` fares to other airports with
/// prices in `[50, 500)`, and each airport requires a visa with probability
/// `visa_ratio`. No airport pair is priced twice and there are no self-loops.
pub fn generate_fare_network<R: Rng>(
    airports: usize,
    fares_per_airport: usize,
    visa_ratio: f64,
    rng: &mut R,
) -> (DestinationCatalog, Vec<Fare>) {
    let mut catalog = DestinationCatalog::new();
    for i in 0..airports {
        let visa_required = rng.gen_bool(visa_ratio.clamp(0.0, 1.0));
        catalog.insert(
            airport_code(i),
            Destination::new(format!("Airport {}", i), visa_required),
        );
    }

    let mut fares = Vec::new();
    let mut priced = HashSet::new();
    if airports < 2 {
        return (catalog, fares);
    }

    for from in 0..airports {
        for _ in 0..fares_per_airport {
            let to = rng.gen_range(0..airports);
            if to == from || !priced.insert((from.min(to), from.max(to))) {
                continue;
            }
            // Whole-cent prices keep sums exact enough to compare in tests
            let price = rng.gen_range(5_000..50_000) as f64 / 100.0;
            fares.push(Fare::new(airport_code(from), airport_code(to), price));
        }
    }

    (catalog, fares)
}
