//! Scenario text loader.
//!
//! # Format
//!
//! Three sections, each introduced by a header line.  Blank lines are
//! ignored.  A `#` at the start of a line or after whitespace starts a
//! comment that runs to the end of the line; a `#` inside a word is data,
//! so `1: Bar#1` names the city `Bar#1`.
//!
//! ```text
//! [CITIES]
//! 1: Moscow
//! 2: Tver
//! [ROADS]
//! 1 - 2: 170, 150, 900
//! [REQUESTS]
//! Moscow -> Tver | (Д, В, С)
//! ```
//!
//! | Section      | Line syntax                         |
//! |--------------|-------------------------------------|
//! | `[CITIES]`   | `id: name`                          |
//! | `[ROADS]`    | `idA - idB: length, time, cost`     |
//! | `[REQUESTS]` | `from -> to \| (p1, p2, p3)`        |
//!
//! Roads reference cities by numeric id; requests by name.  Priority tokens
//! are those accepted by `Criterion::from_str` (`Д`/`В`/`С` or `L`/`T`/`C`).
//!
//! # Failure policy
//!
//! Anything wrong in `[CITIES]` or `[ROADS]` aborts the load: a graph with a
//! silently missing road would give wrong answers for every request.  A bad
//! request line only rejects that request; it is kept in
//! [`Scenario::rejected`] so the result file can report it.
//!
//! Request city names are *not* checked here.  An unknown name is reported
//! by the routing engine when the request is planned.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ro_core::{Priorities, Request, RequestId};
use ro_network::{City, Road, RoadGraph};
use tracing::{info, warn};

use crate::{InputError, InputResult};

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A loaded scenario: the road graph plus every request line, accepted or not.
#[derive(Debug, Default)]
pub struct Scenario {
    pub graph:    RoadGraph,
    /// Well-formed requests, in file order.
    pub requests: Vec<Request>,
    /// Malformed requests, in file order.
    pub rejected: Vec<RejectedRequest>,
}

impl Scenario {
    /// Total number of request lines, accepted or rejected.
    pub fn request_count(&self) -> usize {
        self.requests.len() + self.rejected.len()
    }
}

/// A request line that could not be turned into a [`Request`].
///
/// `id` is drawn from the same sequence as accepted requests, so merging
/// both lists by id restores file order.
#[derive(Debug)]
pub struct RejectedRequest {
    pub id:     RequestId,
    /// The line as written, comments stripped.
    pub text:   String,
    pub reason: InputError,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario from a file.
pub fn load_scenario(path: &Path) -> InputResult<Scenario> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    let scenario = load_scenario_reader(file)?;
    info!(
        path = %path.display(),
        cities = scenario.graph.city_count(),
        roads = scenario.graph.road_count(),
        requests = scenario.requests.len(),
        rejected = scenario.rejected.len(),
        "scenario loaded"
    );
    Ok(scenario)
}

/// Like [`load_scenario`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R) -> InputResult<Scenario> {
    let mut parser = Parser::default();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        parser.line(i + 1, &line?)?;
    }
    Ok(parser.finish())
}

/// Parse a scenario held in memory.
pub fn parse_scenario(text: &str) -> InputResult<Scenario> {
    let mut parser = Parser::default();
    for (i, line) in text.lines().enumerate() {
        parser.line(i + 1, line)?;
    }
    Ok(parser.finish())
}

// ── Parser ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
enum Section {
    #[default]
    None,
    Cities,
    Roads,
    Requests,
}

#[derive(Default)]
struct Parser {
    section:  Section,
    /// Scenario city id → city name, for resolving `[ROADS]` lines.
    names:    HashMap<u32, String>,
    scenario: Scenario,
    next_id:  u32,
}

impl Parser {
    fn line(&mut self, no: usize, raw: &str) -> InputResult<()> {
        let line = strip_comment(raw);
        if line.is_empty() {
            return Ok(());
        }

        if line.starts_with('[') {
            self.section = parse_header(no, line)?;
            return Ok(());
        }

        match self.section {
            Section::None     => Err(InputError::syntax(no, "data before the first section header")),
            Section::Cities   => self.city(no, line),
            Section::Roads    => self.road(no, line),
            Section::Requests => {
                self.request(no, line);
                Ok(())
            }
        }
    }

    fn city(&mut self, no: usize, line: &str) -> InputResult<()> {
        let (id, name) = line
            .split_once(':')
            .ok_or_else(|| InputError::syntax(no, "expected `id: name`"))?;
        let id = parse_number(no, id, "city id")?;
        let name = name.trim();
        if name.is_empty() {
            return Err(InputError::syntax(no, "city name is empty"));
        }

        if let Some(existing) = self.names.get(&id) {
            if existing != name {
                return Err(InputError::DuplicateCityId { line: no, id, existing: existing.clone() });
            }
        }
        self.scenario
            .graph
            .add_city(City::new(id, name))
            .map_err(|source| InputError::Network { line: no, source })?;
        self.names.insert(id, name.to_owned());
        Ok(())
    }

    fn road(&mut self, no: usize, line: &str) -> InputResult<()> {
        let (ends, weights) = line
            .split_once(':')
            .ok_or_else(|| InputError::syntax(no, "expected `idA - idB: length, time, cost`"))?;
        let (a, b) = ends
            .split_once('-')
            .ok_or_else(|| InputError::syntax(no, "expected `idA - idB` before `:`"))?;
        let a = self.resolve(no, parse_number(no, a, "city id")?)?;
        let b = self.resolve(no, parse_number(no, b, "city id")?)?;

        let weights: Vec<&str> = weights.split(',').collect();
        let [length, time, cost] = weights[..] else {
            return Err(InputError::syntax(
                no,
                format!("expected 3 weights (length, time, cost), got {}", weights.len()),
            ));
        };
        let road = Road::new(
            a,
            b,
            parse_number(no, length, "length")?,
            parse_number(no, time, "time")?,
            parse_number(no, cost, "cost")?,
        );

        self.scenario
            .graph
            .add_road(road)
            .map_err(|source| InputError::Network { line: no, source })
    }

    fn request(&mut self, no: usize, line: &str) {
        let id = RequestId(self.next_id);
        self.next_id += 1;

        match parse_request(no, id, line) {
            Ok(request) => self.scenario.requests.push(request),
            Err(reason) => {
                warn!(line = no, %reason, "request rejected");
                self.scenario.rejected.push(RejectedRequest { id, text: line.to_owned(), reason });
            }
        }
    }

    fn resolve(&self, no: usize, id: u32) -> InputResult<String> {
        self.names
            .get(&id)
            .cloned()
            .ok_or(InputError::UnknownCityId { line: no, id })
    }

    fn finish(self) -> Scenario {
        self.scenario
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn strip_comment(raw: &str) -> &str {
    let cut = raw
        .char_indices()
        .find(|&(i, c)| c == '#' && raw[..i].chars().next_back().is_none_or(char::is_whitespace))
        .map_or(raw.len(), |(i, _)| i);
    raw[..cut].trim()
}

fn parse_header(no: usize, line: &str) -> InputResult<Section> {
    match line.to_uppercase().as_str() {
        "[CITIES]"   => Ok(Section::Cities),
        "[ROADS]"    => Ok(Section::Roads),
        "[REQUESTS]" => Ok(Section::Requests),
        _ => Err(InputError::syntax(
            no,
            format!("unknown section {line}: expected [CITIES], [ROADS] or [REQUESTS]"),
        )),
    }
}

fn parse_number(no: usize, field: &str, what: &str) -> InputResult<u32> {
    let field = field.trim();
    field.parse::<u32>().map_err(|_| {
        InputError::syntax(no, format!("invalid {what} {field:?}: expected a non-negative integer"))
    })
}

fn parse_request(no: usize, id: RequestId, line: &str) -> InputResult<Request> {
    let (cities, priorities) = line
        .split_once('|')
        .ok_or_else(|| InputError::syntax(no, "expected `from -> to | (p1, p2, p3)`"))?;
    let (from, to) = cities
        .split_once("->")
        .ok_or_else(|| InputError::syntax(no, "expected `from -> to` before `|`"))?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(InputError::syntax(no, "request city name is empty"));
    }

    let priorities: Priorities = priorities
        .parse()
        .map_err(|source| InputError::Priorities { line: no, source })?;
    Ok(Request::new(id, from, to, priorities))
}
