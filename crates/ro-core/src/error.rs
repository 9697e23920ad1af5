//! Core error type.
//!
//! Every variant here describes bad input data: a priority list that is not
//! a permutation of the three criteria, or a token that names no criterion.
//! Downstream crates wrap `CoreError` as one variant of their own enums.

use thiserror::Error;

use crate::Criterion;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("priority list must name exactly 3 criteria, got {0}")]
    PriorityCount(usize),

    #[error("criterion {0} appears more than once in the priority list")]
    DuplicateCriterion(Criterion),

    #[error("unknown criterion token {0:?}")]
    UnknownCriterion(String),

    #[error("unbalanced parentheses in priority list {0:?}")]
    UnbalancedParentheses(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ro-core`.
pub type CoreResult<T> = Result<T, CoreError>;

// ── ErrorCategory ─────────────────────────────────────────────────────────────

/// Who is at fault when a request cannot be answered.
///
/// "No path exists" is not an error at all; it is an empty route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ErrorCategory {
    /// The scenario referenced something invalid.
    Input,
    /// The engine broke one of its own invariants.
    Internal,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Input    => "input",
            ErrorCategory::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
