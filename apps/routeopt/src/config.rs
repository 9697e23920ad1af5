//! Command-line arguments and their merge onto [`RunConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use ro_core::{LogLevel, OutputFormat, RunConfig};

/// Multi-criteria route planner.
///
/// For every request in the scenario file, finds the shortest, fastest and
/// cheapest route and a compromise among them chosen by the request's
/// priority order.
#[derive(Parser, Debug, Default)]
#[command(name = "routeopt", version, about)]
pub struct Args {
    /// JSON run configuration.  Flags below override its fields.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scenario file [default: input.txt]
    #[arg(short, long, value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Result file (text) or directory (csv) [default: output.txt]
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Result format: text or csv
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Plan requests in parallel (needs the `parallel` feature)
    #[arg(long)]
    pub parallel: bool,

    /// Raise console verbosity; repeat for trace output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolve the effective configuration: defaults, then the JSON file,
    /// then flags.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => RunConfig::default(),
        };
        self.apply(&mut config);
        config.validate().context("invalid run configuration")?;
        Ok(config)
    }

    fn apply(&self, config: &mut RunConfig) {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.parallel |= self.parallel;
        config.log_level = match self.verbose {
            0 => config.log_level,
            1 => config.log_level.max(LogLevel::Debug),
            _ => LogLevel::Trace,
        };
    }
}

fn read_config(path: &Path) -> Result<RunConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("cannot parse config {}", path.display()))
}
