//! Rendering of check results, as the classic text transcript or as JSON.

use std::io::Write;

use serde::Serialize;

use crate::domain::{ProcessId, SystemState};
use crate::error::Result;
use crate::safety::{SafetyOutcome, ScanOrder};

pub const SAFE_SEQUENCE_HEADER: &str = "\nSafe Sequence:";
pub const DEADLOCK_BANNER: &str = "\nDeadlock detected!";

/// Write the sequence line, followed by the deadlock banner when the state is unsafe.
pub fn write_transcript<W: Write>(out: &mut W, outcome: &SafetyOutcome) -> Result<()> {
    out.write_all(SAFE_SEQUENCE_HEADER.as_bytes())?;
    for id in outcome.completed() {
        write!(out, "{id} ")?;
    }
    if !outcome.is_safe() {
        out.write_all(DEADLOCK_BANNER.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Deadlocked,
}

/// Machine-readable summary of one check.
#[derive(Debug, Clone, Serialize)]
pub struct SafetyReport {
    pub verdict: Verdict,
    pub sequence: Vec<ProcessId>,
    pub blocked: Vec<ProcessId>,
    pub scan_order: ScanOrder,
    pub resource_count: usize,
    pub process_count: usize,
    pub fingerprint: String,
}

impl SafetyReport {
    pub fn new(state: &SystemState, scan_order: ScanOrder, outcome: &SafetyOutcome) -> Self {
        Self {
            verdict: if outcome.is_safe() {
                Verdict::Safe
            } else {
                Verdict::Deadlocked
            },
            sequence: outcome.completed().to_vec(),
            blocked: outcome.blocked().to_vec(),
            scan_order,
            resource_count: state.resource_count(),
            process_count: state.process_count(),
            fingerprint: state.fingerprint(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| std::io::Error::from(e).into())
    }
}
