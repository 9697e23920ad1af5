//! Human-readable text backend.
//!
//! One block per request, blocks separated by a blank line:
//!
//! ```text
//! ДЛИНА: A -> B -> C | Д=20, В=10, С=6
//! ВРЕМЯ: A -> C | Д=30, В=3, С=1
//! СТОИМОСТЬ: A -> C | Д=30, В=3, С=1
//! КОМПРОМИСС: A -> C | Д=30, В=3, С=1
//! ```
//!
//! A missing route reads `<LABEL>: Маршрут не найден`; a failed request is a
//! single `ОШИБКА: <request> | <message>` line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ro_core::{Criterion, Request};
use ro_routing::{Route, RouteKind, RouteSet};
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{FailureRow, OutputResult};

const NOT_FOUND: &str = "Маршрут не найден";
const FAILURE: &str = "ОШИБКА";

/// Writes results as text to any `io::Write`.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl TextWriter<BufWriter<File>> {
    /// Create (or truncate) `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let file = File::create(path)?;
        debug!(path = %path.display(), "text output opened");
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Consume the writer and return the sink, e.g. a `Vec<u8>` in tests.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Section label for a route kind.
pub fn label(kind: RouteKind) -> &'static str {
    match kind {
        RouteKind::Optimal(Criterion::Length) => "ДЛИНА",
        RouteKind::Optimal(Criterion::Time)   => "ВРЕМЯ",
        RouteKind::Optimal(Criterion::Cost)   => "СТОИМОСТЬ",
        RouteKind::Compromise                 => "КОМПРОМИСС",
    }
}

/// `A -> B -> C | Д=20, В=10, С=6`, or the not-found marker.
pub fn render_route(route: &Route) -> String {
    if route.is_empty() {
        return NOT_FOUND.to_owned();
    }
    let totals = Criterion::ALL
        .iter()
        .map(|&c| format!("{}={}", c.symbol(), route.total(c)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} | {}", route.cities().join(" -> "), totals)
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_routes(&mut self, _request: &Request, routes: &RouteSet) -> OutputResult<()> {
        for (kind, route) in routes.iter() {
            writeln!(self.out, "{}: {}", label(kind), render_route(route))?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn write_failure(&mut self, failure: &FailureRow) -> OutputResult<()> {
        writeln!(self.out, "{FAILURE}: {} | {}", failure.request, failure.message)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
