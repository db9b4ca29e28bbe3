//! CLI argument parsing for metro
//!
//! Supports global flags: --network, --config, --format, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use metro_core::config::SearchStrategy;
pub use metro_core::format::OutputFormat;
use parse::{parse_format, parse_strategy};

/// Metro - route planner for metro networks
#[derive(Parser, Debug)]
#[command(name = "metro")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network definition file (TOML, or JSON with a .json extension)
    #[arg(long, short = 'n', global = true, env = "METRO_NETWORK")]
    pub network: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, env = "METRO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, metro_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every route between two stations
    Routes {
        /// Departure station
        from: String,

        /// Arrival station
        to: String,

        /// Stop after this many routes
        #[arg(long)]
        max_routes: Option<usize>,

        /// Ignore routes longer than this many stations
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Show a station's lines and neighbours
    Station {
        /// Station name
        name: String,
    },

    /// List stations served by more than one line
    Intersections,

    /// List the first and last station of every line
    Terminals,

    /// Find the cheapest path to the nearest interchange station
    Nearest {
        /// Departure station
        name: String,

        /// Search strategy (dijkstra or label-correcting)
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<SearchStrategy>,
    },

    /// Read commands interactively from standard input
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_nearest_with_strategy() {
        let cli = Cli::try_parse_from([
            "metro",
            "--network",
            "city.toml",
            "nearest",
            "Airport",
            "--strategy",
            "label-correcting",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Nearest { name, strategy }) => {
                assert_eq!(name, "Airport");
                assert_eq!(strategy, Some(SearchStrategy::LabelCorrecting));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_strategy() {
        let result = Cli::try_parse_from(["metro", "nearest", "A", "--strategy", "astar"]);
        assert!(result.is_err());
    }
}
