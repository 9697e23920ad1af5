//! `ro-output` — result writers for the routeopt workspace.
//!
//! Two backends are provided:
//!
//! | Backend        | Files created                        |
//! |----------------|--------------------------------------|
//! | [`TextWriter`] | one text file (any `io::Write`)      |
//! | [`CsvWriter`]  | `routes.csv`, `errors.csv`           |
//!
//! Both implement [`OutputWriter`].  Callers hand each request to the writer
//! either as a planned [`RouteSet`](ro_routing::RouteSet) or as a
//! [`FailureRow`], in request order.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ro_output::{OutputWriter, TextWriter};
//!
//! let mut w = TextWriter::create(Path::new("output.txt"))?;
//! w.write_routes(&request, &routes)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{FailureRow, RouteRow};
pub use text::TextWriter;
pub use writer::OutputWriter;
