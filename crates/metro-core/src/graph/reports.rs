//! Read-only listings over stations and lines

use serde::Serialize;

use crate::error::Result;
use crate::network::{Fare, Network};

/// A station served by more than one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intersection {
    pub station: String,
    pub line_count: usize,
}

/// The first and last station of a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Terminal {
    pub line: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjacent {
    pub station: String,
    pub fare: Fare,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationInfo {
    pub name: String,
    pub lines: Vec<String>,
    pub adjacent: Vec<Adjacent>,
}

/// Interchange stations in registration order
pub fn intersections(network: &Network) -> Vec<Intersection> {
    network
        .stations()
        .iter()
        .filter(|station| station.is_interchange())
        .map(|station| Intersection {
            station: station.name().to_string(),
            line_count: station.lines().len(),
        })
        .collect()
}

/// Terminals of every line in registration order
pub fn terminals(network: &Network) -> Vec<Terminal> {
    network
        .lines()
        .iter()
        .map(|line| Terminal {
            line: line.name().to_string(),
            start: network.station(line.start()).name().to_string(),
            end: network.station(line.end()).name().to_string(),
        })
        .collect()
}

/// Line memberships and neighbours of one station
pub fn station_info(network: &Network, name: &str) -> Result<StationInfo> {
    let station = network.station(network.resolve(name)?);

    Ok(StationInfo {
        name: station.name().to_string(),
        lines: station.lines().to_vec(),
        adjacent: station
            .routes()
            .iter()
            .map(|route| Adjacent {
                station: network.station(route.to).name().to_string(),
                fare: route.fare,
            })
            .collect(),
    })
}
