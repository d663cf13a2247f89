//! `banker` command-line adapter: argument parsing, configuration layering,
//! output formatting and exit codes over `banker-core`.

#![deny(unsafe_code)]

pub mod error;
pub mod parser;
pub mod run;

pub use error::{CliError, EXIT_DEADLOCK, EXIT_INTERNAL};
pub use parser::{Cli, OutputFormat, ScanOrderArg};
pub use run::{resolve_config, run};
