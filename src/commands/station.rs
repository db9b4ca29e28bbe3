//! Station info command

use std::io::Write;

use metro_core::error::Result;
use metro_core::format::OutputFormat;
use metro_core::graph::StationInfo;
use metro_core::network::Network;

/// Execute the station command
pub fn execute(
    format: OutputFormat,
    network: &Network,
    name: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let info = network.station_info(name)?;

    match format {
        OutputFormat::Human => output_human(&info, out)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?,
    }
    Ok(())
}

fn output_human(info: &StationInfo, out: &mut dyn Write) -> Result<()> {
    let adjacent: Vec<String> = info
        .adjacent
        .iter()
        .map(|a| format!("{} ({})", a.station, a.fare))
        .collect();

    writeln!(out, "Station Name: {}", info.name)?;
    writeln!(out, "Lines: {}", info.lines.join(", "))?;
    writeln!(out, "Adjacent Stations: {}", adjacent.join(", "))?;
    Ok(())
}
