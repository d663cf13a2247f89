//! CLI entry point.

use std::io;
use std::process::ExitCode;

use banker_cli::{run, Cli, CliError, EXIT_DEADLOCK, EXIT_INTERNAL};
use banker_core::Verdict;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays a clean transcript.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match run(&cli, stdin.lock(), &mut stdout) {
        Ok(Verdict::Safe) => ExitCode::SUCCESS,
        Ok(Verdict::Deadlocked) => ExitCode::from(EXIT_DEADLOCK),
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map_or(EXIT_INTERNAL, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
