//! `ro-core` — foundational types for the `routeopt` workspace.
//!
//! This crate is a dependency of every other `ro-*` crate.  It has no
//! `ro-*` dependencies and a single mandatory external one (`thiserror`),
//! plus optional `serde`.
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `CityId`, `NodeIx`, `RequestId`                        |
//! | [`criterion`] | `Criterion`, `Priorities`                              |
//! | [`request`]   | `Request`                                              |
//! | [`config`]    | `RunConfig`, `OutputFormat`, `LogLevel`                |
//! | [`error`]     | `CoreError`, `CoreResult`, `ErrorCategory`             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod criterion;
pub mod error;
pub mod ids;
pub mod request;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{LogLevel, OutputFormat, RunConfig};
pub use criterion::{Criterion, Priorities};
pub use error::{CoreError, CoreResult, ErrorCategory};
pub use ids::{CityId, NodeIx, RequestId};
pub use request::Request;
