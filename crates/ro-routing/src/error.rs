//! Routing error type.

use thiserror::Error;

use ro_core::ErrorCategory;
use ro_network::NetworkError;

/// Errors produced by `ro-routing`.
///
/// An unreachable destination is *not* an error: the search returns an
/// empty path and the planner an empty [`Route`](crate::Route).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// A request named a city the graph does not contain.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// A path step has no road behind it.  Paths produced by the search over
    /// the same graph never trigger this.
    #[error("route reconstruction failed: no road between {from:?} and {to:?}")]
    Reconstruction { from: String, to: String },
}

impl RoutingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RoutingError::Network(e)             => e.category(),
            RoutingError::Reconstruction { .. }  => ErrorCategory::Internal,
        }
    }
}

pub type RoutingResult<T> = Result<T, RoutingError>;
