//! A single routing request.

use std::fmt;

use crate::{Priorities, RequestId};

/// Route `from` → `to`, breaking ties between the three single-criterion
/// optima by `priorities`.
///
/// Holding a `Priorities` value means the ordering is already a checked
/// permutation; malformed requests never get this far.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub id:         RequestId,
    pub from:       String,
    pub to:         String,
    pub priorities: Priorities,
}

impl Request {
    pub fn new(
        id:         RequestId,
        from:       impl Into<String>,
        to:         impl Into<String>,
        priorities: Priorities,
    ) -> Self {
        Self { id, from: from.into(), to: to.into(), priorities }
    }
}

/// Renders in scenario-file syntax: `A -> B | (Д,В,С)`.
impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} | {}", self.from, self.to, self.priorities)
    }
}
