use super::*;
use crate::network::Network;
use std::collections::HashSet;

fn network_with_routes(routes: &[(&str, &str, u64)]) -> Network {
    let mut network = Network::new();
    for (from, to, fare) in routes {
        network.add_station(from);
        network.add_station(to);
        network.add_route(from, to, Fare::new(*fare)).unwrap();
    }
    network
}

fn collect(network: &Network, from: &str, to: &str) -> Vec<(Vec<String>, u64)> {
    enumerate_routes(network, from, to, RoutesConfig::default())
        .unwrap()
        .map(|route| (route.stations, route.fare.value()))
        .collect()
}

fn names(stations: &[&str]) -> Vec<String> {
    stations.iter().map(|s| s.to_string()).collect()
}

/// A-B-C-D-A, every route costs 1
fn square() -> Network {
    network_with_routes(&[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "A", 1)])
}

#[test]
fn test_cycle_yields_both_directions() {
    let routes = collect(&square(), "A", "C");

    assert_eq!(
        routes,
        vec![(names(&["A", "B", "C"]), 2), (names(&["A", "D", "C"]), 2)]
    );
}

#[test]
fn test_same_station_yields_single_zero_fare_route() {
    let routes = collect(&square(), "B", "B");
    assert_eq!(routes, vec![(names(&["B"]), 0)]);
}

#[test]
fn test_isolated_source_same_station() {
    let mut network = Network::new();
    network.add_station("Lonely");
    assert_eq!(collect(&network, "Lonely", "Lonely"), vec![(names(&["Lonely"]), 0)]);
}

#[test]
fn test_unreachable_destination_is_empty() {
    let mut network = network_with_routes(&[("A", "B", 1)]);
    network.add_station("Island");

    assert!(collect(&network, "A", "Island").is_empty());
}

#[test]
fn test_unknown_station_is_error() {
    let network = square();
    let err = enumerate_routes(&network, "A", "Nowhere", RoutesConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, MetroError::StationNotFound { ref name } if name == "Nowhere"));

    let err = enumerate_routes(&network, "Nowhere", "A", RoutesConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, MetroError::StationNotFound { .. }));
}

#[test]
fn test_discovery_follows_registration_order() {
    // Hub reaches T through X, Y or Z; registered in that order.
    let network = network_with_routes(&[
        ("Hub", "X", 1),
        ("Hub", "Y", 2),
        ("Hub", "Z", 3),
        ("X", "T", 1),
        ("Y", "T", 1),
        ("Z", "T", 1),
    ]);

    let firsts: Vec<String> = collect(&network, "Hub", "T")
        .into_iter()
        .map(|(stations, _)| stations[1].clone())
        .collect();
    assert_eq!(firsts, names(&["X", "Y", "Z"]));
}

#[test]
fn test_parallel_routes_are_distinct_paths() {
    let network = network_with_routes(&[("A", "B", 2), ("A", "B", 5)]);
    let routes = collect(&network, "A", "B");

    assert_eq!(routes, vec![(names(&["A", "B"]), 2), (names(&["A", "B"]), 5)]);
}

#[test]
fn test_routes_are_simple_and_fares_add_up() {
    // Complete graph on five stations with distinct fares
    let stations = ["A", "B", "C", "D", "E"];
    let mut edges = Vec::new();
    for (i, from) in stations.iter().enumerate() {
        for (j, to) in stations.iter().enumerate().skip(i + 1) {
            edges.push((*from, *to, (i * 10 + j) as u64));
        }
    }
    let network = network_with_routes(&edges);
    let fare_of = |a: &str, b: &str| -> u64 {
        edges
            .iter()
            .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
            .map(|(_, _, f)| *f)
            .unwrap()
    };

    let routes = collect(&network, "A", "E");

    // 1 direct + 3 + 3*2 + 3*2*1 simple paths through the three inner stations
    assert_eq!(routes.len(), 16);
    let distinct: HashSet<&Vec<String>> = routes.iter().map(|(s, _)| s).collect();
    assert_eq!(distinct.len(), routes.len());

    for (path, fare) in &routes {
        let unique: HashSet<&String> = path.iter().collect();
        assert_eq!(unique.len(), path.len(), "repeated station in {path:?}");
        assert_eq!(path.first().unwrap(), "A");
        assert_eq!(path.last().unwrap(), "E");

        let expected: u64 = path.windows(2).map(|w| fare_of(&w[0], &w[1])).sum();
        assert_eq!(*fare, expected);
    }
}

#[test]
fn test_destination_is_never_passed_through() {
    // A-B-C with an extra spur C-D-B: routes to B must end at B
    let network = network_with_routes(&[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "B", 1)]);
    let routes = collect(&network, "A", "B");
    assert_eq!(routes, vec![(names(&["A", "B"]), 1)]);
}

#[test]
fn test_enumerator_is_lazy_and_fused() {
    let network = square();
    let mut routes = enumerate_routes(&network, "A", "C", RoutesConfig::default()).unwrap();

    assert!(routes.next().is_some());
    assert_eq!(routes.emitted(), 1);
    assert!(routes.next().is_some());
    assert!(routes.next().is_none());
    assert!(routes.next().is_none());
    assert_eq!(routes.emitted(), 2);
}

#[test]
fn test_max_routes_caps_output() {
    let network = square();
    let limits = RoutesConfig {
        max_routes: Some(1),
        ..Default::default()
    };
    let routes: Vec<_> = enumerate_routes(&network, "A", "C", limits).unwrap().collect();

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].stations, names(&["A", "B", "C"]));
}

#[test]
fn test_max_depth_prunes_long_routes() {
    // Direct A-C plus the long way round A-B-C
    let network = network_with_routes(&[("A", "B", 1), ("B", "C", 1), ("A", "C", 5)]);
    let limits = RoutesConfig {
        max_depth: Some(2),
        ..Default::default()
    };
    let routes: Vec<_> = enumerate_routes(&network, "A", "C", limits)
        .unwrap()
        .map(|r| r.stations)
        .collect();

    assert_eq!(routes, vec![names(&["A", "C"])]);
}

#[test]
fn test_max_depth_keeps_routes_of_exact_length() {
    let network = network_with_routes(&[("A", "B", 1), ("B", "C", 1)]);
    let limits = RoutesConfig {
        max_depth: Some(3),
        ..Default::default()
    };
    let count = enumerate_routes(&network, "A", "C", limits).unwrap().count();
    assert_eq!(count, 1);
}

#[test]
fn test_enumeration_restarts_cleanly() {
    let network = square();
    let first = collect(&network, "A", "C");
    let second = collect(&network, "A", "C");
    assert_eq!(first, second);
}
