//! Run configuration.
//!
//! Typically loaded from a JSON file by the application crate (feature
//! `serde`) and then overridden field by field from the command line.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::CoreError;

// ── OutputFormat ──────────────────────────────────────────────────────────────

/// Which result writer the runner uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputFormat {
    /// Human-readable text, one block per request.
    #[default]
    Text,
    /// `routes.csv` + `errors.csv` in the output directory.
    Csv,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv  => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv"          => Ok(OutputFormat::Csv),
            other => Err(CoreError::Config(format!(
                "unknown output format {other:?}: expected \"text\" or \"csv\""
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── LogLevel ──────────────────────────────────────────────────────────────────

/// Console verbosity.  Mapped onto a `tracing` level filter by the runner.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Everything the runner needs for one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Scenario file with `[CITIES]`, `[ROADS]` and `[REQUESTS]` sections.
    pub input: PathBuf,

    /// Result file for `Text`, result directory for `Csv`.
    pub output: PathBuf,

    pub format: OutputFormat,

    /// Plan requests on a rayon pool.  Only honoured when the runner is
    /// built with the `parallel` feature.
    pub parallel: bool,

    pub log_level: LogLevel,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input:     PathBuf::from("input.txt"),
            output:    PathBuf::from("output.txt"),
            format:    OutputFormat::Text,
            parallel:  false,
            log_level: LogLevel::Info,
        }
    }
}

impl RunConfig {
    /// Reject combinations that cannot work before any file is touched.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.input.as_os_str().is_empty() {
            return Err(CoreError::Config("input path is empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(CoreError::Config("output path is empty".into()));
        }
        if self.input == self.output {
            return Err(CoreError::Config(format!(
                "input and output both point at {}",
                self.input.display()
            )));
        }
        Ok(())
    }
}
