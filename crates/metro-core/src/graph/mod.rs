//! Queries over a built network
//!
//! - `routes`: exhaustive simple-route enumeration (DFS with backtracking)
//! - `interchange`: cheapest path to the nearest interchange station
//! - `reports`: intersection, terminal and station listings
//! - `traversal`: the adjacency trait the searches run against

pub mod interchange;
pub mod path;
pub mod reports;
pub mod routes;
pub mod traversal;

pub use interchange::nearest_interchange;
pub use reports::{intersections, station_info, terminals, Adjacent, Intersection, StationInfo, Terminal};
pub use routes::{enumerate_routes, RouteEnumerator};
pub use traversal::GraphProvider;

use crate::config::{RoutesConfig, SearchStrategy};
use crate::error::Result;
use crate::network::{Network, PathResult};

impl Network {
    /// Lazily enumerate every simple route between two stations
    pub fn enumerate_routes(
        &self,
        from: &str,
        to: &str,
        limits: RoutesConfig,
    ) -> Result<RouteEnumerator<'_>> {
        enumerate_routes(self, from, to, limits)
    }

    /// Cheapest path to the closest station served by more than one line
    pub fn nearest_interchange(&self, from: &str, strategy: SearchStrategy) -> Result<PathResult> {
        nearest_interchange(self, from, strategy)
    }

    pub fn station_info(&self, name: &str) -> Result<StationInfo> {
        station_info(self, name)
    }

    pub fn intersections(&self) -> Vec<Intersection> {
        intersections(self)
    }

    pub fn terminals(&self) -> Vec<Terminal> {
        terminals(self)
    }
}
