//! Nearest interchange command

use std::io::Write;
use std::time::Instant;

use metro_core::config::SearchStrategy;
use metro_core::error::Result;
use metro_core::format::OutputFormat;
use metro_core::network::Network;
use metro_core::trace_time;

/// Execute the nearest command
pub fn execute(
    format: OutputFormat,
    network: &Network,
    name: &str,
    strategy: SearchStrategy,
    out: &mut dyn Write,
) -> Result<()> {
    let start = Instant::now();
    let path = network.nearest_interchange(name, strategy)?;
    trace_time!(start, "nearest_interchange", hops = path.len());

    match format {
        OutputFormat::Human => writeln!(out, "Path to nearest intersection: {path}")?,
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": name,
                "interchange": path.stations.last(),
                "strategy": strategy,
                "stations": path.stations,
                "fare": path.fare,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}
