//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use metro_core::bail_usage;
use metro_core::config::MetroConfig;
use metro_core::error::Result;
use metro_core::network::{Network, NetworkDefinition};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load and build the network named by `--network`
    pub fn load_network(&self) -> Result<Network> {
        let Some(path) = &self.cli.network else {
            bail_usage!("no network definition given (use --network or METRO_NETWORK)");
        };

        let network = NetworkDefinition::load(path)?.build()?;
        if self.cli.verbose {
            debug!(elapsed = ?self.start.elapsed(), path = %path.display(), "load_network");
        }
        Ok(network)
    }

    /// Load `--config` if given, otherwise defaults
    pub fn load_config(&self) -> Result<MetroConfig> {
        match &self.cli.config {
            Some(path) => MetroConfig::load(path),
            None => Ok(MetroConfig::default()),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("metro {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A route planner for metro networks.");
        println!();
        println!("Run `metro --help` for usage information.");
        Ok(())
    }
}
