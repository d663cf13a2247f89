use std::io::{BufRead, Write};

use anyhow::Context;
use banker_core::{
    read_state, write_transcript, BankerConfig, SafetyChecker, SafetyReport, Verdict,
};

use crate::error::CliError;
use crate::parser::{Cli, OutputFormat};

/// Load the configuration file (if any) and apply command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<BankerConfig, CliError> {
    let mut cfg = BankerConfig::load(cli.config.as_deref())?;
    if let Some(resources) = cli.resources {
        cfg.resource_count = resources;
    }
    if let Some(max) = cli.max_processes {
        cfg.max_processes = max;
    }
    if let Some(order) = cli.scan_order {
        cfg.scan_order = order.into();
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Execute one invocation against the given streams. Returns the verdict, or
/// `Verdict::Safe` when nothing was checked (`--dump-config`).
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> anyhow::Result<Verdict> {
    let cfg = resolve_config(cli).context("failed to resolve configuration")?;
    tracing::debug!(?cfg, "effective configuration");

    if cli.dump_config {
        let text = cfg.to_toml().map_err(CliError::from)?;
        out.write_all(text.as_bytes()).map_err(CliError::from)?;
        return Ok(Verdict::Safe);
    }

    let state = match (cli.format, cli.quiet) {
        (OutputFormat::Text, false) => read_state(input, out, &cfg),
        _ => read_state(input, &mut std::io::sink(), &cfg),
    }
    .map_err(CliError::from)
    .context("failed to read allocation state")?;

    let checker = SafetyChecker::new(cfg.scan_order);
    let outcome = checker.check(&state);
    let report = SafetyReport::new(&state, cfg.scan_order, &outcome);
    tracing::info!(
        verdict = ?report.verdict,
        fingerprint = %report.fingerprint,
        "safety check finished"
    );

    match cli.format {
        OutputFormat::Text => write_transcript(out, &outcome).map_err(CliError::from)?,
        OutputFormat::Json => {
            let json = report.to_json().map_err(CliError::from)?;
            writeln!(out, "{json}").map_err(CliError::from)?;
        }
    }
    Ok(report.verdict)
}
