//! Interactive command loop
//!
//! Reads whitespace-separated tokens from the input, so arguments may follow
//! a command on the same line or on later lines. Query failures are reported
//! and the loop carries on; only I/O errors end the session early.

use std::collections::VecDeque;
use std::io::{BufRead, IsTerminal, Write};

use tracing::debug;

use crate::commands::{intersections, nearest, routes, station, terminals};
use metro_core::config::MetroConfig;
use metro_core::error::{ExitCode, MetroError, Result};
use metro_core::format::OutputFormat;
use metro_core::network::Network;

const COMMAND_PROMPT: &str = "\nEnter command (find_routes, station_info, display_intersections, \
display_terminal_stations, find_path_to_nearest_intersection, or exit): ";

/// Whitespace tokenizer over buffered input
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    prompts: bool,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R, prompts: bool) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            prompts,
        }
    }

    /// Next token, or `None` at end of input. The prompt is shown only when
    /// more input must be read.
    fn next(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            if self.prompts {
                write!(out, "{prompt}")?;
                out.flush()?;
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a> {
    network: &'a Network,
    config: &'a MetroConfig,
    format: OutputFormat,
    prompts: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        network: &'a Network,
        config: &'a MetroConfig,
        format: OutputFormat,
        quiet: bool,
    ) -> Self {
        Self {
            network,
            config,
            format,
            prompts: !quiet && std::io::stdin().is_terminal(),
        }
    }

    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn run<R: BufRead>(&mut self, input: R, out: &mut dyn Write) -> Result<()> {
        let mut tokens = Tokens::new(input, self.prompts);
        let mut executed = 0usize;

        while let Some(command) = tokens.next(COMMAND_PROMPT, out)? {
            match self.dispatch(&command, &mut tokens, out) {
                Ok(Flow::Continue) => executed += 1,
                Ok(Flow::Exit) => break,
                Err(err) if err.exit_code() == ExitCode::Data => self.report(&err, out)?,
                Err(err) => return Err(err),
            }
        }

        debug!(executed, "shell_finished");
        Ok(())
    }

    fn dispatch<R: BufRead>(
        &self,
        command: &str,
        tokens: &mut Tokens<R>,
        out: &mut dyn Write,
    ) -> Result<Flow> {
        match command {
            "find_routes" | "routes" => {
                let prompt = "Enter source and destination stations: ";
                let Some(from) = tokens.next(prompt, out)? else {
                    return Ok(Flow::Exit);
                };
                let Some(to) = tokens.next(prompt, out)? else {
                    return Ok(Flow::Exit);
                };
                routes::execute(
                    self.format,
                    self.network,
                    &from,
                    &to,
                    self.config.routes,
                    out,
                )?;
            }
            "station_info" | "station" => {
                let Some(name) = tokens.next("Enter station name: ", out)? else {
                    return Ok(Flow::Exit);
                };
                station::execute(self.format, self.network, &name, out)?;
            }
            "display_intersections" | "intersections" => {
                intersections::execute(self.format, self.network, out)?;
            }
            "display_terminal_stations" | "terminals" => {
                terminals::execute(self.format, self.network, out)?;
            }
            "find_path_to_nearest_intersection" | "nearest" => {
                let Some(name) = tokens.next("Enter station name: ", out)? else {
                    return Ok(Flow::Exit);
                };
                nearest::execute(
                    self.format,
                    self.network,
                    &name,
                    self.config.interchange.strategy,
                    out,
                )?;
            }
            "exit" | "quit" => return Ok(Flow::Exit),
            _ => writeln!(out, "Invalid command.")?,
        }
        Ok(Flow::Continue)
    }

    fn report(&self, err: &MetroError, out: &mut dyn Write) -> Result<()> {
        match (self.format, err) {
            (OutputFormat::Json, _) => writeln!(out, "{}", err.to_json())?,
            (OutputFormat::Human, MetroError::NoInterchangeReachable { .. }) => {
                writeln!(out, "No intersection found.")?
            }
            (OutputFormat::Human, _) => writeln!(out, "error: {err}")?,
        }
        Ok(())
    }
}
