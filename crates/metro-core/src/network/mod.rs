//! Metro network data model
//!
//! The [`Network`] owns the station registry, the route graph (stored as
//! per-station incidence lists) and the line catalog. All mutation happens
//! through [`Network::add_station`], [`Network::add_route`] and
//! [`Network::add_line`]; queries in [`crate::graph`] only read.

pub mod definition;
pub mod types;

use std::collections::HashMap;

use tracing::debug;

use crate::error::{MetroError, Result};
pub use definition::NetworkDefinition;
pub use types::{Fare, Line, PathResult, Route, Station, StationId};

#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    by_name: HashMap<String, StationId>,
    lines: Vec<Line>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station, returning the existing id if the name is known.
    pub fn add_station(&mut self, name: &str) -> StationId {
        if let Some(id) = self.lookup(name) {
            return id;
        }

        let id = StationId::from(self.stations.len());
        self.stations.push(Station::new(name));
        self.by_name.insert(name.to_string(), id);
        debug!(station = name, id = id.index(), "add_station");
        id
    }

    /// Exact, case-sensitive lookup
    pub fn lookup(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Resolve a name or fail with `StationNotFound`
    pub fn resolve(&self, name: &str) -> Result<StationId> {
        self.lookup(name)
            .ok_or_else(|| MetroError::station_not_found(name))
    }

    /// Connect two registered stations in both directions.
    ///
    /// Both endpoints must already exist; nothing is mutated otherwise.
    /// Registering the same pair twice produces two parallel routes.
    pub fn add_route(&mut self, src: &str, dest: &str, fare: Fare) -> Result<()> {
        let src_id = self.resolve(src)?;
        let dest_id = self.resolve(dest)?;

        self.stations[src_id.index()].routes.push(Route { to: dest_id, fare });
        self.stations[dest_id.index()].routes.push(Route { to: src_id, fare });

        debug!(from = src, to = dest, fare = fare.value(), "add_route");
        Ok(())
    }

    /// Register a line over an ordered list of stations.
    ///
    /// Unknown stations are created. Each station records the line once,
    /// even if the list names it more than once.
    pub fn add_line<S: AsRef<str>>(&mut self, name: &str, stations: &[S]) -> Result<()> {
        if stations.is_empty() {
            return Err(MetroError::EmptyLine {
                name: name.to_string(),
            });
        }
        if self.line(name).is_some() {
            return Err(MetroError::LineNameConflict {
                name: name.to_string(),
            });
        }

        let mut ids = Vec::with_capacity(stations.len());
        for station in stations {
            let id = self.add_station(station.as_ref());
            let lines = &mut self.stations[id.index()].lines;
            if !lines.iter().any(|line| line == name) {
                lines.push(name.to_string());
            }
            ids.push(id);
        }

        debug!(line = name, stations = ids.len(), "add_line");
        self.lines.push(Line {
            name: name.to_string(),
            stations: ids,
        });
        Ok(())
    }

    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    /// Stations in registration order
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Lines in registration order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, name: &str) -> Option<&Line> {
        self.lines.iter().find(|line| line.name == name)
    }
}
