//! Command-line definition for the `banker` binary.

use std::path::PathBuf;

use banker_core::ScanOrder;
use clap::{Parser, ValueEnum};

/// Check whether a resource-allocation state is safe.
///
/// Reads the process count, the maximum matrix, the allocated matrix and the
/// available vector from standard input as whitespace-separated integers.
#[derive(Parser, Debug)]
#[command(name = "banker")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, env = "BANKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of resource types per row
    #[arg(long)]
    pub resources: Option<usize>,

    /// Largest accepted process count
    #[arg(long = "max-processes")]
    pub max_processes: Option<usize>,

    /// Whether the scan resumes or restarts after a process finishes
    #[arg(long = "scan-order", value_enum)]
    pub scan_order: Option<ScanOrderArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print input prompts
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long = "dump-config")]
    pub dump_config: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScanOrderArg {
    Continue,
    Restart,
}

impl From<ScanOrderArg> for ScanOrder {
    fn from(arg: ScanOrderArg) -> Self {
        match arg {
            ScanOrderArg::Continue => ScanOrder::Continue,
            ScanOrderArg::Restart => ScanOrder::Restart,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
