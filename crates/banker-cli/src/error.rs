//! CLI-specific error types and exit code mapping.

use banker_core::BankerError;
use thiserror::Error;

/// Exit code when the state is unsafe.
pub const EXIT_DEADLOCK: u8 = 1;

/// Exit code for failures that carry no [`CliError`].
pub const EXIT_INTERNAL: u8 = 70; // EX_SOFTWARE

#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed or inconsistent allocation data.
    #[error("Invalid input: {0}")]
    Data(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Exit codes follow sysexits.h.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Data(_) => 65,   // EX_DATAERR
            CliError::Config(_) => 78, // EX_CONFIG
            CliError::Io(_) => 74,     // EX_IOERR
        }
    }
}

impl From<BankerError> for CliError {
    fn from(err: BankerError) -> Self {
        match err {
            BankerError::InvalidInput(msg) => CliError::Data(msg),
            e @ (BankerError::CapacityExceeded { .. } | BankerError::InconsistentDemand { .. }) => {
                CliError::Data(e.to_string())
            }
            BankerError::Config(msg) => CliError::Config(msg),
            BankerError::Io(e) => CliError::Io(e.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}
