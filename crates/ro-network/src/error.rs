//! Network error type.

use thiserror::Error;

use ro_core::ErrorCategory;

/// Errors produced by `ro-network`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// A road or a lookup referenced a city name that was never registered.
    #[error("unknown city {name:?}")]
    UnknownCity { name: String },

    #[error("graph is full: at most {limit} cities")]
    TooManyCities { limit: usize },
}

impl NetworkError {
    pub fn unknown_city(name: impl Into<String>) -> Self {
        NetworkError::UnknownCity { name: name.into() }
    }

    /// Every network error is bad input data.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Input
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
