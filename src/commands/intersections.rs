//! Interchange listing command

use std::io::Write;

use metro_core::error::Result;
use metro_core::format::OutputFormat;
use metro_core::network::Network;

/// Execute the intersections command
pub fn execute(format: OutputFormat, network: &Network, out: &mut dyn Write) -> Result<()> {
    let intersections = network.intersections();

    match format {
        OutputFormat::Human => {
            for intersection in &intersections {
                writeln!(out, "{}, {}", intersection.station, intersection.line_count)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&intersections)?)?;
        }
    }
    Ok(())
}
