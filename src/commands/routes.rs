//! Route enumeration command

use std::io::Write;
use std::time::Instant;

use metro_core::config::RoutesConfig;
use metro_core::error::Result;
use metro_core::format::OutputFormat;
use metro_core::network::{Network, PathResult};
use metro_core::trace_time;

/// Execute the routes command
pub fn execute(
    format: OutputFormat,
    network: &Network,
    from: &str,
    to: &str,
    limits: RoutesConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let start = Instant::now();
    let routes = network.enumerate_routes(from, to, limits)?;

    match format {
        OutputFormat::Human => {
            // Streamed: the enumeration can be long on dense networks
            let mut count = 0usize;
            for route in routes {
                if count == 0 {
                    writeln!(out, "Possible routes:")?;
                }
                writeln!(out, "{route}")?;
                count += 1;
            }
            if count == 0 {
                writeln!(out, "No routes found.")?;
            }
            trace_time!(start, "enumerate_routes", count = count);
        }
        OutputFormat::Json => {
            let routes: Vec<PathResult> = routes.collect();
            trace_time!(start, "enumerate_routes", count = routes.len());
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "count": routes.len(),
                "routes": routes,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}
