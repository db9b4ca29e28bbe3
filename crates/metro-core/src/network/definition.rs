//! Network definition files
//!
//! A definition lists stations, routes and lines; building it replays the
//! registration calls in that order. TOML is the default format, files
//! ending in `.json` are read as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_invalid;
use crate::error::{MetroError, Result};
use crate::network::{Fare, Network};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDefinition {
    /// Stations that should exist even without routes or lines
    #[serde(default)]
    pub stations: Vec<String>,

    #[serde(default)]
    pub routes: Vec<RouteDefinition>,

    #[serde(default)]
    pub lines: Vec<LineDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub from: String,
    pub to: String,
    pub fare: Fare,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDefinition {
    pub name: String,
    pub stations: Vec<String>,
}

impl NetworkDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a definition file, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MetroError::NetworkNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Check that every name is a non-empty token without whitespace
    pub fn validate(&self) -> Result<()> {
        let route_names = self.routes.iter().flat_map(|r| [&r.from, &r.to]);
        let line_station_names = self.lines.iter().flat_map(|l| l.stations.iter());

        for name in self
            .stations
            .iter()
            .chain(route_names)
            .chain(line_station_names)
        {
            check_token("station name", name)?;
        }
        for line in &self.lines {
            check_token("line name", &line.name)?;
        }
        Ok(())
    }

    /// Validate, then replay the definition into a fresh network
    pub fn build(&self) -> Result<Network> {
        self.validate()?;

        let mut network = Network::new();
        for name in &self.stations {
            network.add_station(name);
        }
        for route in &self.routes {
            network.add_station(&route.from);
            network.add_station(&route.to);
            network.add_route(&route.from, &route.to, route.fare)?;
        }
        for line in &self.lines {
            network.add_line(&line.name, line.stations.as_slice())?;
        }

        debug!(
            stations = network.station_count(),
            routes = self.routes.len(),
            lines = network.lines().len(),
            "build_network"
        );
        Ok(network)
    }
}

fn check_token(context: &str, name: &str) -> Result<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        bail_invalid!(context, format!("{name:?}"));
    }
    Ok(())
}
