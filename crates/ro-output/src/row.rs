//! Flat row types written by the CSV backend.

use serde::Serialize;

use ro_core::{ErrorCategory, Request, RequestId};
use ro_routing::{Route, RouteKind};

/// One route of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub request_id: u32,
    pub from:       String,
    pub to:         String,
    pub kind:       &'static str,
    pub found:      bool,
    /// Visited cities joined by `->`; empty when not found.
    pub cities:     String,
    pub length:     u64,
    pub time:       u64,
    pub cost:       u64,
}

impl RouteRow {
    pub const HEADER: [&'static str; 9] =
        ["request_id", "from", "to", "kind", "found", "cities", "length", "time", "cost"];

    pub fn new(request: &Request, kind: RouteKind, route: &Route) -> Self {
        let (length, time, cost) = route.totals();
        Self {
            request_id: request.id.0,
            from:       request.from.clone(),
            to:         request.to.clone(),
            kind:       kind.as_str(),
            found:      route.is_found(),
            cities:     route.cities().join("->"),
            length,
            time,
            cost,
        }
    }
}

/// A request that produced no routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRow {
    pub request_id: u32,
    /// The request as written (or as rendered, if it parsed).
    pub request:    String,
    pub category:   &'static str,
    pub message:    String,
}

impl FailureRow {
    pub const HEADER: [&'static str; 4] = ["request_id", "request", "category", "message"];

    pub fn new(
        id:       RequestId,
        request:  impl Into<String>,
        category: ErrorCategory,
        message:  impl ToString,
    ) -> Self {
        Self {
            request_id: id.0,
            request:    request.into(),
            category:   category.as_str(),
            message:    message.to_string(),
        }
    }
}
