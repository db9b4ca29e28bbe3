//! Configuration for metro
//!
//! Read from a TOML file passed with `--config` (or `METRO_CONFIG`).
//! Every field has a default, so an empty file is a valid configuration.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;

pub use types::{InterchangeConfig, MetroConfig, RoutesConfig, SearchStrategy};

impl MetroConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MetroConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject limits that would make every query empty
    pub fn validate(&self) -> Result<()> {
        if self.routes.max_routes == Some(0) {
            bail_invalid!("routes.max_routes", 0);
        }
        if self.routes.max_depth == Some(0) {
            bail_invalid!("routes.max_depth", 0);
        }
        Ok(())
    }
}
