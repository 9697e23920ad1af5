use thiserror::Error;

use ro_core::{CoreError, ErrorCategory};
use ro_network::NetworkError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: city id {id} is already assigned to {existing:?}")]
    DuplicateCityId { line: usize, id: u32, existing: String },

    #[error("line {line}: road references unknown city id {id}")]
    UnknownCityId { line: usize, id: u32 },

    #[error("line {line}: {source}")]
    Network { line: usize, source: NetworkError },

    #[error("line {line}: invalid priorities: {source}")]
    Priorities { line: usize, source: CoreError },
}

impl InputError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        InputError::Syntax { line, message: message.into() }
    }

    /// Line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            InputError::Io(_) => None,
            InputError::Syntax { line, .. }
            | InputError::DuplicateCityId { line, .. }
            | InputError::UnknownCityId { line, .. }
            | InputError::Network { line, .. }
            | InputError::Priorities { line, .. } => Some(*line),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Input
    }
}

pub type InputResult<T> = Result<T, InputError>;
