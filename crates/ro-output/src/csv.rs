//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `routes.csv`: four rows per answered request
//! - `errors.csv`: one row per failed request

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use tracing::debug;

use ro_core::Request;
use ro_routing::RouteSet;

use crate::writer::OutputWriter;
use crate::{FailureRow, OutputResult, RouteRow};

pub const ROUTES_FILE: &str = "routes.csv";
pub const ERRORS_FILE: &str = "errors.csv";

/// Writes results to two CSV files.
pub struct CsvWriter {
    routes:   Writer<File>,
    errors:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    ///
    /// Headers are written eagerly so an empty run still produces
    /// well-formed files.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut routes = headerless(&dir.join(ROUTES_FILE))?;
        routes.write_record(RouteRow::HEADER)?;

        let mut errors = headerless(&dir.join(ERRORS_FILE))?;
        errors.write_record(FailureRow::HEADER)?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { routes, errors, finished: false })
    }
}

fn headerless(path: &Path) -> OutputResult<Writer<File>> {
    Ok(WriterBuilder::new().has_headers(false).from_path(path)?)
}

impl OutputWriter for CsvWriter {
    fn write_routes(&mut self, request: &Request, routes: &RouteSet) -> OutputResult<()> {
        for (kind, route) in routes.iter() {
            self.routes.serialize(RouteRow::new(request, kind, route))?;
        }
        Ok(())
    }

    fn write_failure(&mut self, failure: &FailureRow) -> OutputResult<()> {
        self.errors.serialize(failure)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.routes.flush()?;
        self.errors.flush()?;
        Ok(())
    }
}
