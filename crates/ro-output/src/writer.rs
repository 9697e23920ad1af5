//! The `OutputWriter` trait implemented by all backend writers.

use ro_core::Request;
use ro_routing::RouteSet;

use crate::{FailureRow, OutputResult};

/// Trait implemented by the text and CSV writers.
///
/// Calls arrive in request order; a request is written either through
/// `write_routes` or through `write_failure`, never both.
pub trait OutputWriter {
    /// Write the four routes answering `request`.
    fn write_routes(&mut self, request: &Request, routes: &RouteSet) -> OutputResult<()>;

    /// Record a request that could not be answered.
    fn write_failure(&mut self, failure: &FailureRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
