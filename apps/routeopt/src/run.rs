//! One invocation: load, plan, write.

use std::time::Instant;

use anyhow::{Context, Result};
use ro_core::{ErrorCategory, OutputFormat, Request, RequestId, RunConfig};
use ro_input::{RejectedRequest, Scenario, load_scenario};
use ro_output::{CsvWriter, FailureRow, OutputWriter, TextWriter};
use ro_routing::{RoutePlanner, RouteSet, RoutingResult};
use tracing::{error, info, warn};

// ── Answers ───────────────────────────────────────────────────────────────────

/// What happened to one request line.
#[derive(Debug)]
pub enum Answer<'s> {
    Planned(&'s Request, RoutingResult<RouteSet>),
    Rejected(&'s RejectedRequest),
}

impl Answer<'_> {
    pub fn id(&self) -> RequestId {
        match self {
            Answer::Planned(r, _) => r.id,
            Answer::Rejected(r)   => r.id,
        }
    }
}

/// Pair accepted requests with their results and interleave the rejected
/// lines, restoring file order.
pub fn collect_answers(
    scenario: &Scenario,
    results:  Vec<RoutingResult<RouteSet>>,
) -> Vec<Answer<'_>> {
    let mut answers: Vec<Answer<'_>> = scenario
        .requests
        .iter()
        .zip(results)
        .map(|(r, result)| Answer::Planned(r, result))
        .chain(scenario.rejected.iter().map(Answer::Rejected))
        .collect();
    answers.sort_by_key(Answer::id);
    answers
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Requests with four routes written.
    pub answered:  usize,
    /// Answered requests whose endpoints are not connected.
    pub not_found: usize,
    /// Malformed lines and unknown cities.
    pub rejected:  usize,
    /// Route reconstruction faults.
    pub internal:  usize,
}

/// Hand every answer to `writer` in order.
pub fn write_answers(writer: &mut dyn OutputWriter, answers: &[Answer<'_>]) -> Result<Summary> {
    let mut summary = Summary::default();
    for answer in answers {
        match answer {
            Answer::Planned(request, Ok(routes)) => {
                writer.write_routes(request, routes)?;
                summary.answered += 1;
                if !routes.compromise.is_found() {
                    summary.not_found += 1;
                }
            }
            Answer::Planned(request, Err(err)) => {
                let category = err.category();
                match category {
                    ErrorCategory::Input    => warn!(request = %request, %err, "request failed"),
                    ErrorCategory::Internal => error!(request = %request, %err, "internal routing fault"),
                }
                writer.write_failure(&FailureRow::new(request.id, request.to_string(), category, err))?;
                match category {
                    ErrorCategory::Input    => summary.rejected += 1,
                    ErrorCategory::Internal => summary.internal += 1,
                }
            }
            Answer::Rejected(rejected) => {
                let row = FailureRow::new(
                    rejected.id,
                    &rejected.text,
                    rejected.reason.category(),
                    &rejected.reason,
                );
                writer.write_failure(&row)?;
                summary.rejected += 1;
            }
        }
    }
    writer.finish()?;
    Ok(summary)
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

fn plan(planner: &RoutePlanner, scenario: &Scenario, parallel: bool) -> Vec<RoutingResult<RouteSet>> {
    #[cfg(feature = "parallel")]
    if parallel {
        return planner.plan_all_parallel(&scenario.graph, &scenario.requests);
    }
    #[cfg(not(feature = "parallel"))]
    if parallel {
        warn!("built without the `parallel` feature; planning sequentially");
    }
    planner.plan_all(&scenario.graph, &scenario.requests)
}

fn open_writer(config: &RunConfig) -> Result<Box<dyn OutputWriter>> {
    let writer: Box<dyn OutputWriter> = match config.format {
        OutputFormat::Text => Box::new(TextWriter::create(&config.output)?),
        OutputFormat::Csv  => Box::new(CsvWriter::new(&config.output)?),
    };
    Ok(writer)
}

pub fn run(config: &RunConfig) -> Result<Summary> {
    let started = Instant::now();

    let scenario = load_scenario(&config.input)
        .with_context(|| format!("cannot load scenario {}", config.input.display()))?;

    let planner = RoutePlanner::new();
    let results = plan(&planner, &scenario, config.parallel);
    let answers = collect_answers(&scenario, results);

    let mut writer = open_writer(config)
        .with_context(|| format!("cannot create output {}", config.output.display()))?;
    let summary = write_answers(writer.as_mut(), &answers)
        .with_context(|| format!("cannot write results to {}", config.output.display()))?;

    info!(
        answered  = summary.answered,
        not_found = summary.not_found,
        rejected  = summary.rejected,
        internal  = summary.internal,
        output    = %config.output.display(),
        format    = %config.format,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "done"
    );
    Ok(summary)
}
