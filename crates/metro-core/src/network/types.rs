use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a station: its registration index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(usize);

impl StationId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StationId {
    fn from(index: usize) -> Self {
        StationId(index)
    }
}

/// Fare for travelling one route, or the accumulated fare of a path.
/// Unsigned, so a route can never carry a negative cost.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fare(u64);

impl Fare {
    pub const ZERO: Fare = Fare(0);

    pub fn new(value: u64) -> Self {
        Fare(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::ops::Add for Fare {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Fare(self.0.saturating_add(other.0))
    }
}

impl std::iter::Sum for Fare {
    fn sum<I: Iterator<Item = Fare>>(iter: I) -> Self {
        iter.fold(Fare::ZERO, |acc, fare| acc + fare)
    }
}

impl From<u64> for Fare {
    fn from(value: u64) -> Self {
        Fare(value)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One incidence entry: the far endpoint of a route and its fare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub to: StationId,
    pub fare: Fare,
}

/// A named node of the network
#[derive(Debug, Clone)]
pub struct Station {
    pub(crate) name: String,
    pub(crate) lines: Vec<String>,
    pub(crate) routes: Vec<Route>,
}

impl Station {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            routes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line memberships in registration order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Incident routes in registration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// A station served by more than one line
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }
}

/// A named ordered sequence of stations
#[derive(Debug, Clone)]
pub struct Line {
    pub(crate) name: String,
    pub(crate) stations: Vec<StationId>,
}

impl Line {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// First station of the line
    pub fn start(&self) -> StationId {
        self.stations[0]
    }

    /// Last station of the line
    pub fn end(&self) -> StationId {
        self.stations[self.stations.len() - 1]
    }
}

/// A path through the network and its accumulated fare
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub stations: Vec<String>,
    pub fare: Fare,
}

impl PathResult {
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Cost: {}", self.stations.join(" -> "), self.fare)
    }
}
