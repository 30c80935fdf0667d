mod common;

use common::{caribbean_catalog, caribbean_fares};
use metro_travel::algorithm::traits::ShortestPathAlgorithm;
use metro_travel::graph::Graph;
use metro_travel::{
    BreadthFirst, Cost, Destination, DestinationCatalog, Dijkstra, Error, Fare, FilteredView,
    PathFinder, RouteGraph, Unreachable,
};
use ordered_float::OrderedFloat;

// Test helper: a ring of `n` airports where every hop costs 10, plus a single
// expensive shortcut from the first airport to the one opposite it
fn ring_network(n: usize, shortcut_price: f64) -> RouteGraph {
    let mut catalog = DestinationCatalog::new();
    for i in 0..n {
        catalog.insert(format!("R{:02}", i), Destination::new(format!("Ring {}", i), false));
    }

    let mut fares: Vec<Fare> = (0..n)
        .map(|i| Fare::new(format!("R{:02}", i), format!("R{:02}", (i + 1) % n), 10.0))
        .collect();
    fares.push(Fare::new("R00", format!("R{:02}", n / 2), shortcut_price));

    RouteGraph::new(&catalog, Some(&fares)).unwrap()
}

#[test]
fn test_cheapest_route_prefers_direct_fare() {
    let graph = RouteGraph::new(&caribbean_catalog(), Some(&caribbean_fares())).unwrap();
    let view = graph.filtered_view(true);
    let finder = PathFinder::new(&view);

    let route = finder.shortest_path_by_cost("CCS", "PUJ").unwrap();
    assert_eq!(route.cost, 120.0);
    assert_eq!(route.path, vec!["CCS", "PUJ"]);
}

#[test]
fn test_cheapest_route_takes_detour_when_cheaper() {
    let fares = vec![
        Fare::new("CCS", "PUJ", 500.0),
        Fare::new("CCS", "MIA", 300.0),
        Fare::new("MIA", "PUJ", 90.0),
    ];
    let graph = RouteGraph::new(&caribbean_catalog(), Some(&fares)).unwrap();

    let with_visa = graph.filtered_view(true);
    let route = PathFinder::new(&with_visa).shortest_path_by_cost("CCS", "PUJ").unwrap();
    assert_eq!(route.cost, 390.0);
    assert_eq!(route.path, vec!["CCS", "MIA", "PUJ"]);

    // Without a visa the detour through Miami is not available
    let without_visa = graph.filtered_view(false);
    let route = PathFinder::new(&without_visa).shortest_path_by_cost("CCS", "PUJ").unwrap();
    assert_eq!(route.cost, 500.0);
    assert_eq!(route.path, vec!["CCS", "PUJ"]);
}

#[test]
fn test_fewest_stops_route() {
    let graph = RouteGraph::new(&caribbean_catalog(), Some(&caribbean_fares())).unwrap();
    let view = graph.filtered_view(true);
    let finder = PathFinder::new(&view);

    let route = finder.shortest_path_by_stops("CCS", "PUJ").unwrap();
    assert_eq!(route.stops, 1);
    assert_eq!(route.path, vec!["CCS", "PUJ"]);
    assert_eq!(route.cost, 120.0);
}

#[test]
fn test_fewest_stops_ignores_price() {
    let graph = ring_network(8, 1000.0);
    let view = graph.filtered_view(true);
    let finder = PathFinder::new(&view);

    let by_cost = finder.shortest_path_by_cost("R00", "R04").unwrap();
    assert_eq!(by_cost.cost, 40.0);
    assert_eq!(by_cost.path.len(), 5);

    let by_stops = finder.shortest_path_by_stops("R00", "R04").unwrap();
    assert_eq!(by_stops.stops, 1);
    assert_eq!(by_stops.path, vec!["R00", "R04"]);
    assert_eq!(by_stops.cost, 1000.0);
    assert_eq!(by_stops.stops, by_stops.path.len() - 1);
}

#[test]
fn test_destination_requiring_visa_is_not_reachable() {
    let graph = RouteGraph::new(&caribbean_catalog(), Some(&caribbean_fares())).unwrap();
    let view = graph.filtered_view(false);
    let finder = PathFinder::new(&view);

    for result in [
        finder.shortest_path_by_cost("CCS", "MIA").map(|_| ()),
        finder.shortest_path_by_stops("CCS", "MIA").map(|_| ()),
        finder.shortest_path_by_cost("MIA", "PUJ").map(|_| ()),
    ] {
        match result {
            Err(Error::NotReachable { code, reason }) => {
                assert_eq!(code, "MIA");
                assert_eq!(reason, Unreachable::VisaRequired { name: "Miami".to_string() });
            }
            other => panic!("Expected NotReachable, got {:?}", other),
        }
    }

    // The same traveller with a visa gets a route
    let view = graph.filtered_view(true);
    let route = PathFinder::new(&view).shortest_path_by_cost("CCS", "MIA").unwrap();
    assert_eq!(route.cost, 210.0);
    assert_eq!(route.path, vec!["CCS", "PUJ", "MIA"]);
}

#[test]
fn test_unknown_airport_is_not_reachable() {
    let graph = RouteGraph::new(&caribbean_catalog(), Some(&caribbean_fares())).unwrap();
    let view = graph.filtered_view(true);
    let finder = PathFinder::new(&view);

    assert!(matches!(
        finder.shortest_path_by_cost("CCS", "BOG"),
        Err(Error::NotReachable { reason: Unreachable::UnknownAirport, .. })
    ));
    assert!(matches!(
        finder.shortest_path_by_stops("BOG", "CCS"),
        Err(Error::NotReachable { reason: Unreachable::UnknownAirport, .. })
    ));
}

#[test]
fn test_disconnected_airports_have_no_path() {
    let mut catalog = caribbean_catalog();
    catalog.insert("AUA".to_string(), Destination::new("Aruba", false));
    let graph = RouteGraph::new(&catalog, Some(&caribbean_fares())).unwrap();
    let view = graph.filtered_view(true);
    let finder = PathFinder::new(&view);

    match finder.shortest_path_by_cost("CCS", "AUA") {
        Err(Error::NoPath { origin, destination }) => {
            assert_eq!(origin, "CCS");
            assert_eq!(destination, "AUA");
        }
        other => panic!("Expected NoPath, got {:?}", other),
    }
    assert!(matches!(
        finder.shortest_path_by_stops("AUA", "PUJ"),
        Err(Error::NoPath { .. })
    ));
}

#[test]
fn test_filter_can_disconnect_reachable_airports() {
    // PUJ is only reachable through MIA
    let fares = vec![Fare::new("CCS", "MIA", 300.0), Fare::new("MIA", "PUJ", 90.0)];
    let graph = RouteGraph::new(&caribbean_catalog(), Some(&fares)).unwrap();

    let view = graph.filtered_view(false);
    let finder = PathFinder::new(&view);
    assert!(matches!(
        finder.shortest_path_by_cost("CCS", "PUJ"),
        Err(Error::NoPath { .. })
    ));
    assert!(matches!(
        finder.shortest_path_by_stops("CCS", "PUJ"),
        Err(Error::NoPath { .. })
    ));
}

#[test]
fn test_same_origin_and_destination() {
    let graph = RouteGraph::new(&caribbean_catalog(), Some(&caribbean_fares())).unwrap();
    let view = graph.filtered_view(true);
    let finder = PathFinder::new(&view);

    let route = finder.shortest_path_by_cost("PUJ", "PUJ").unwrap();
    assert_eq!(route.cost, 0.0);
    assert_eq!(route.path, vec!["PUJ"]);

    let route = finder.shortest_path_by_stops("PUJ", "PUJ").unwrap();
    assert_eq!(route.stops, 0);
}

#[test]
fn test_equal_cost_routes_resolve_deterministically() {
    // Two routes of cost 200 from AAA to DDD: via BBB and via CCC
    let mut catalog = DestinationCatalog::new();
    for code in ["AAA", "BBB", "CCC", "DDD"] {
        catalog.insert(code.to_string(), Destination::new(code, false));
    }
    let fares = vec![
        Fare::new("AAA", "CCC", 100.0),
        Fare::new("CCC", "DDD", 100.0),
        Fare::new("AAA", "BBB", 100.0),
        Fare::new("BBB", "DDD", 100.0),
    ];
    let graph = RouteGraph::new(&catalog, Some(&fares)).unwrap();
    let view = graph.filtered_view(true);
    let finder = PathFinder::new(&view);

    // BBB has the lower index, is settled first and reaches DDD first
    for _ in 0..3 {
        let route = finder.shortest_path_by_cost("AAA", "DDD").unwrap();
        assert_eq!(route.cost, 200.0);
        assert_eq!(route.path, vec!["AAA", "BBB", "DDD"]);

        let route = finder.shortest_path_by_stops("AAA", "DDD").unwrap();
        assert_eq!(route.path, vec!["AAA", "BBB", "DDD"]);
    }
}

// Direct use of the algorithms on vertex ids, like any other Graph implementation
#[test]
fn test_algorithms_on_vertex_ids() {
    let graph = ring_network(10, 45.0);
    let view: FilteredView = graph.filtered_view(true);
    let source = graph.index_of("R00").unwrap();
    let target = graph.index_of("R05").unwrap();

    let dijkstra = Dijkstra::new();
    let result = <Dijkstra as ShortestPathAlgorithm<Cost, FilteredView>>::compute_shortest_paths(&dijkstra, &view, source).unwrap();
    assert_eq!(result.distances[target], Some(OrderedFloat(45.0)));
    let path = <Dijkstra as ShortestPathAlgorithm<Cost, FilteredView>>::get_path(&dijkstra, &result, target).unwrap();
    assert_eq!(path, vec![source, target]);

    let bfs = BreadthFirst::new();
    let result = <BreadthFirst as ShortestPathAlgorithm<Cost, RouteGraph>>::compute_shortest_paths(&bfs, &graph, source).unwrap();
    let far = graph.index_of("R03").unwrap();
    assert_eq!(result.distances[far], Some(OrderedFloat(3.0)));
    let path = <BreadthFirst as ShortestPathAlgorithm<Cost, RouteGraph>>::get_path(&bfs, &result, far).unwrap();

    // Verify path continuity
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], far, "Path should end at target");
    for i in 1..path.len() {
        assert!(graph.has_edge(path[i - 1], path[i]), "Path should only use existing edges");
    }
}

#[test]
fn test_algorithms_reject_excluded_source() {
    let graph = RouteGraph::new(&caribbean_catalog(), Some(&caribbean_fares())).unwrap();
    let view = graph.filtered_view(false);
    let miami = graph.index_of("MIA").unwrap();

    let dijkstra = Dijkstra::new();
    let result = <Dijkstra as ShortestPathAlgorithm<Cost, FilteredView>>::compute_shortest_paths(&dijkstra, &view, miami);
    assert!(matches!(result, Err(Error::SourceNotFound)));

    let bfs = BreadthFirst::new();
    let result = <BreadthFirst as ShortestPathAlgorithm<Cost, FilteredView>>::compute_shortest_paths(&bfs, &view, miami);
    assert!(matches!(result, Err(Error::SourceNotFound)));
}
