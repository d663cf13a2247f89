//! Replay a proposed completion order against a state to confirm it is a safe sequence.

use thiserror::Error;

use crate::domain::{ProcessId, SystemState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("{0} is not part of the process table")]
    UnknownProcess(ProcessId),

    #[error("{0} appears more than once")]
    Duplicate(ProcessId),

    #[error("{process} needs {need} of resource {resource} but only {available} are free")]
    Insufficient {
        process: ProcessId,
        resource: usize,
        need: u64,
        available: u64,
    },

    #[error("sequence never schedules {missing:?}")]
    Incomplete { missing: Vec<ProcessId> },
}

/// Walk `sequence` in order, releasing each process's allocation once it is
/// scheduled. Returns the final available vector, which must equal the state's
/// total units.
pub fn replay(state: &SystemState, sequence: &[ProcessId]) -> Result<Vec<u64>, ReplayError> {
    let mut available = state.available().to_vec();
    let mut seen = vec![false; state.process_count()];

    for &id in sequence {
        let process = state.process(id).ok_or(ReplayError::UnknownProcess(id))?;
        if std::mem::replace(&mut seen[id.index()], true) {
            return Err(ReplayError::Duplicate(id));
        }
        if let Some(resource) = process
            .need()
            .iter()
            .zip(&available)
            .position(|(n, a)| n > a)
        {
            return Err(ReplayError::Insufficient {
                process: id,
                resource,
                need: process.need()[resource],
                available: available[resource],
            });
        }
        for (a, held) in available.iter_mut().zip(&process.allocated) {
            *a += held;
        }
    }

    let missing: Vec<ProcessId> = seen
        .iter()
        .enumerate()
        .filter(|(_, s)| !**s)
        .map(|(i, _)| ProcessId(i))
        .collect();
    if !missing.is_empty() {
        return Err(ReplayError::Incomplete { missing });
    }
    Ok(available)
}
