use super::*;
use crate::network::Network;

const BOTH: [SearchStrategy; 2] = [SearchStrategy::Dijkstra, SearchStrategy::LabelCorrecting];

fn connect(network: &mut Network, from: &str, to: &str, fare: u64) {
    network.add_station(from);
    network.add_station(to);
    network.add_route(from, to, Fare::new(fare)).unwrap();
}

fn stations(result: &PathResult) -> Vec<&str> {
    result.stations.iter().map(String::as_str).collect()
}

/// S -(fare)- T where T is on Red and Blue, S only on Red
fn spur(fare: u64) -> Network {
    let mut network = Network::new();
    connect(&mut network, "S", "T", fare);
    network.add_line("Red", &["S", "T"]).unwrap();
    network.add_line("Blue", &["T", "U"]).unwrap();
    network
}

#[test]
fn test_direct_neighbor_interchange() {
    for strategy in BOTH {
        let result = nearest_interchange(&spur(7), "S", strategy).unwrap();
        assert_eq!(stations(&result), vec!["S", "T"], "{strategy}");
        assert_eq!(result.fare, Fare::new(7), "{strategy}");
    }
}

#[test]
fn test_single_line_network_has_no_interchange() {
    let mut network = Network::new();
    connect(&mut network, "A", "B", 1);
    connect(&mut network, "B", "C", 1);
    network.add_line("Red", &["A", "B", "C"]).unwrap();

    for strategy in BOTH {
        let err = nearest_interchange(&network, "A", strategy).unwrap_err();
        assert!(
            matches!(err, MetroError::NoInterchangeReachable { ref station } if station == "A"),
            "{strategy}"
        );
    }
}

#[test]
fn test_unreachable_interchange_is_not_found() {
    let mut network = spur(1);
    network.add_station("Island");

    for strategy in BOTH {
        let err = nearest_interchange(&network, "Island", strategy).unwrap_err();
        assert!(matches!(err, MetroError::NoInterchangeReachable { .. }));
    }
}

#[test]
fn test_unknown_station() {
    let err = nearest_interchange(&spur(1), "Ghost", SearchStrategy::Dijkstra).unwrap_err();
    assert!(matches!(err, MetroError::StationNotFound { ref name } if name == "Ghost"));
}

#[test]
fn test_source_interchange_is_skipped() {
    // M is itself an interchange; the answer must be another station
    let mut network = Network::new();
    connect(&mut network, "M", "A", 1);
    connect(&mut network, "A", "N", 2);
    network.add_line("Red", &["M", "A", "N"]).unwrap();
    network.add_line("Blue", &["M", "N"]).unwrap();

    for strategy in BOTH {
        let result = nearest_interchange(&network, "M", strategy).unwrap();
        assert_eq!(stations(&result), vec!["M", "A", "N"], "{strategy}");
        assert_eq!(result.fare, Fare::new(3), "{strategy}");
    }
}

#[test]
fn test_source_interchange_alone_is_not_found() {
    let mut network = Network::new();
    connect(&mut network, "M", "A", 1);
    network.add_line("Red", &["M", "A"]).unwrap();
    network.add_line("Blue", &["M"]).unwrap();

    let err = nearest_interchange(&network, "M", SearchStrategy::Dijkstra).unwrap_err();
    assert!(matches!(err, MetroError::NoInterchangeReachable { .. }));
}

/// S reaches interchange A directly for 10, or interchange C via B for 2.
/// A is discovered first.
fn expensive_first() -> Network {
    let mut network = Network::new();
    connect(&mut network, "S", "A", 10);
    connect(&mut network, "S", "B", 1);
    connect(&mut network, "B", "C", 1);
    network.add_line("Red", &["S", "A", "B", "C"]).unwrap();
    network.add_line("Blue", &["A"]).unwrap();
    network.add_line("Green", &["C"]).unwrap();
    network
}

#[test]
fn test_dijkstra_finds_cheapest_interchange() {
    let result =
        nearest_interchange(&expensive_first(), "S", SearchStrategy::Dijkstra).unwrap();
    assert_eq!(stations(&result), vec!["S", "B", "C"]);
    assert_eq!(result.fare, Fare::new(2));
}

#[test]
fn test_label_correcting_stops_at_first_dequeued() {
    let result =
        nearest_interchange(&expensive_first(), "S", SearchStrategy::LabelCorrecting).unwrap();
    assert_eq!(stations(&result), vec!["S", "A"]);
    assert_eq!(result.fare, Fare::new(10));
}

#[test]
fn test_dijkstra_prefers_cheaper_multi_hop_path() {
    // Direct S-T costs 9, S-X-T costs 2; T is the only interchange
    let mut network = Network::new();
    connect(&mut network, "S", "T", 9);
    connect(&mut network, "S", "X", 1);
    connect(&mut network, "X", "T", 1);
    network.add_line("Red", &["S", "X", "T"]).unwrap();
    network.add_line("Blue", &["T"]).unwrap();

    let result = nearest_interchange(&network, "S", SearchStrategy::Dijkstra).unwrap();
    assert_eq!(stations(&result), vec!["S", "X", "T"]);
    assert_eq!(result.fare, Fare::new(2));
}

#[test]
fn test_dijkstra_ties_break_by_discovery_order() {
    let mut network = Network::new();
    connect(&mut network, "S", "A", 3);
    connect(&mut network, "S", "B", 3);
    network.add_line("Red", &["S", "A", "B"]).unwrap();
    network.add_line("Blue", &["B", "A"]).unwrap();

    let result = nearest_interchange(&network, "S", SearchStrategy::Dijkstra).unwrap();
    assert_eq!(stations(&result), vec!["S", "A"]);
}

#[test]
fn test_zero_fare_routes() {
    let mut network = Network::new();
    connect(&mut network, "S", "A", 0);
    connect(&mut network, "A", "T", 0);
    network.add_line("Red", &["S", "A", "T"]).unwrap();
    network.add_line("Blue", &["T"]).unwrap();

    for strategy in BOTH {
        let result = nearest_interchange(&network, "S", strategy).unwrap();
        assert_eq!(stations(&result), vec!["S", "A", "T"], "{strategy}");
        assert_eq!(result.fare, Fare::ZERO, "{strategy}");
    }
}

#[test]
fn test_labels_relax_only_on_strict_improvement() {
    let source = StationId::from(0);
    let other = StationId::from(1);
    let mut labels = Labels::new(3, source);

    assert!(labels.relax(other, source, Fare::new(5)));
    assert!(!labels.relax(other, source, Fare::new(5)));
    assert!(labels.relax(other, source, Fare::new(4)));
    assert!(!labels.relax(source, other, Fare::ZERO));
    assert_eq!(labels.fare(other), Some(Fare::new(4)));
    assert_eq!(labels.fare(StationId::from(2)), None);
}
