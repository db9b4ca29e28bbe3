//! Line terminals command

use std::io::Write;

use metro_core::error::Result;
use metro_core::format::OutputFormat;
use metro_core::network::Network;

/// Execute the terminals command
pub fn execute(format: OutputFormat, network: &Network, out: &mut dyn Write) -> Result<()> {
    let terminals = network.terminals();

    match format {
        OutputFormat::Human => {
            for terminal in &terminals {
                writeln!(out, "{}: {}, {}", terminal.line, terminal.start, terminal.end)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&terminals)?)?;
        }
    }
    Ok(())
}
