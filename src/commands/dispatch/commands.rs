//! Command implementations for all metro commands

use std::io::{self, Write};

use tracing::debug;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{intersections, nearest, routes, shell, station, terminals};
use metro_core::config::RoutesConfig;
use metro_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let network = ctx.load_network()?;
        let mut config = ctx.load_config()?;
        let format = ctx.cli.format;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self {
            Commands::Routes {
                from,
                to,
                max_routes,
                max_depth,
            } => {
                config.routes = RoutesConfig {
                    max_routes: max_routes.or(config.routes.max_routes),
                    max_depth: max_depth.or(config.routes.max_depth),
                };
                config.validate()?;
                routes::execute(format, &network, from, to, config.routes, &mut out)?;
            }
            Commands::Station { name } => station::execute(format, &network, name, &mut out)?,
            Commands::Intersections => intersections::execute(format, &network, &mut out)?,
            Commands::Terminals => terminals::execute(format, &network, &mut out)?,
            Commands::Nearest { name, strategy } => {
                let strategy = strategy.unwrap_or(config.interchange.strategy);
                nearest::execute(format, &network, name, strategy, &mut out)?;
            }
            Commands::Shell => {
                let stdin = io::stdin();
                let mut session = shell::Session::new(&network, &config, format, ctx.cli.quiet);
                session.run(stdin.lock(), &mut out)?;
            }
        }

        out.flush()?;
        if ctx.cli.verbose {
            debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        }
        Ok(())
    }
}
