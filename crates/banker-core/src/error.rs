use thiserror::Error;

use crate::domain::ProcessId;

/// Errors raised while reading, validating or configuring a safety check.
#[derive(Debug, Error)]
pub enum BankerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{requested} processes requested but capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error(
        "process {process} holds {allocated} units of resource {resource} but declares a maximum of {max}"
    )]
    InconsistentDemand {
        process: ProcessId,
        resource: usize,
        max: u64,
        allocated: u64,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for BankerError {
    fn from(err: config::ConfigError) -> Self {
        BankerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BankerError>;
