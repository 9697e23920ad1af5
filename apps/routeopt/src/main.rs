//! routeopt — multi-criteria route planner.
//!
//! Reads a scenario file (`[CITIES]`, `[ROADS]`, `[REQUESTS]`), answers each
//! request with the shortest, fastest, cheapest and compromise routes, and
//! writes them as text or CSV.
//!
//! ```text
//! cargo run --release -p routeopt -- -i apps/routeopt/data/input.txt -o output.txt
//! cargo run --release -p routeopt --features parallel -- --config apps/routeopt/data/routeopt.json --parallel
//! ```
//!
//! Requests that cannot be answered are reported in the output and do not
//! change the exit status; only a scenario that fails to load or an output
//! that cannot be written does.

mod config;
mod logging;
mod run;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;

use config::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.resolve()?;
    logging::init_std_out_logging(config.log_level)?;

    run::run(&config)?;
    Ok(())
}
