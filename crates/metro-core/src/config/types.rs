//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Top-level configuration (`metro.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetroConfig {
    /// Route enumeration limits
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Nearest-interchange search settings
    #[serde(default)]
    pub interchange: InterchangeConfig,
}

/// Caps on exhaustive route enumeration. Unset means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Stop after this many routes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_routes: Option<usize>,

    /// Never extend a route beyond this many stations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterchangeConfig {
    #[serde(default)]
    pub strategy: SearchStrategy,
}

/// Frontier discipline for the nearest-interchange search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Priority queue keyed by known fare; reports the cheapest interchange
    #[default]
    Dijkstra,
    /// FIFO relaxation; reports the first interchange dequeued
    LabelCorrecting,
}

impl std::str::FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(SearchStrategy::Dijkstra),
            "label-correcting" | "fifo" => Ok(SearchStrategy::LabelCorrecting),
            other => Err(format!(
                "unknown strategy: {} (expected: dijkstra or label-correcting)",
                other
            )),
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Dijkstra => write!(f, "dijkstra"),
            SearchStrategy::LabelCorrecting => write!(f, "label-correcting"),
        }
    }
}
