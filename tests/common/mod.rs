#![allow(dead_code)]

use metro_travel::{Destination, DestinationCatalog, Fare, FilteredView};
use std::collections::HashMap;

/// Caracas, Miami (visa required) and Punta Cana with three fares
pub fn caribbean_catalog() -> DestinationCatalog {
    let mut catalog = DestinationCatalog::new();
    catalog.insert("CCS".to_string(), Destination::new("Caracas", false));
    catalog.insert("MIA".to_string(), Destination::new("Miami", true));
    catalog.insert("PUJ".to_string(), Destination::new("Punta Cana", false));
    catalog
}

pub fn caribbean_fares() -> Vec<Fare> {
    vec![
        Fare::new("CCS", "PUJ", 120.0),
        Fare::new("CCS", "MIA", 300.0),
        Fare::new("MIA", "PUJ", 90.0),
    ]
}

/// Every simple path between two airports of a view, with its total price
pub fn all_simple_paths(view: &FilteredView, origin: &str, destination: &str) -> Vec<(f64, Vec<String>)> {
    let mut adjacency: HashMap<String, Vec<(String, f64)>> = HashMap::new();
    for connection in view.connections() {
        let (a, b) = (connection.from.code.clone(), connection.to.code.clone());
        adjacency.entry(a.clone()).or_default().push((b.clone(), connection.price));
        if a != b {
            adjacency.entry(b).or_default().push((a, connection.price));
        }
    }

    let mut found = Vec::new();
    if !view.contains(origin) || !view.contains(destination) {
        return found;
    }
    let mut path = vec![origin.to_string()];
    extend(&adjacency, destination, &mut path, 0.0, &mut found);
    found
}

fn extend(
    adjacency: &HashMap<String, Vec<(String, f64)>>,
    destination: &str,
    path: &mut Vec<String>,
    cost: f64,
    found: &mut Vec<(f64, Vec<String>)>,
) {
    let current = path[path.len() - 1].clone();
    if current == destination {
        found.push((cost, path.clone()));
        return;
    }
    for (next, price) in adjacency.get(&current).map(Vec::as_slice).unwrap_or(&[]) {
        if path.contains(next) {
            continue;
        }
        path.push(next.clone());
        extend(adjacency, destination, path, cost + price, found);
        path.pop();
    }
}

/// Asserts that no airport appears twice in a path
pub fn assert_simple(path: &[String]) {
    for (i, code) in path.iter().enumerate() {
        assert!(
            !path[i + 1..].contains(code),
            "Path {:?} repeats {}",
            path,
            code
        );
    }
}
