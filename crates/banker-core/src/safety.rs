use serde::{Deserialize, Serialize};

use crate::domain::{ProcessId, SystemState};

/// How the checker walks the process table after a process finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanOrder {
    /// Keep scanning forward with the enlarged `available` vector; a single
    /// round may finish several processes.
    #[default]
    Continue,
    /// Go back to process 0 after every completion.
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyOutcome {
    /// Every process can finish, in this order.
    Safe { sequence: Vec<ProcessId> },
    /// No pending process can make progress. `completed` is the prefix that did finish.
    Deadlocked {
        completed: Vec<ProcessId>,
        blocked: Vec<ProcessId>,
    },
}

impl SafetyOutcome {
    pub fn is_safe(&self) -> bool {
        matches!(self, SafetyOutcome::Safe { .. })
    }

    /// Processes in the order they were judged able to finish.
    pub fn completed(&self) -> &[ProcessId] {
        match self {
            SafetyOutcome::Safe { sequence } => sequence,
            SafetyOutcome::Deadlocked { completed, .. } => completed,
        }
    }

    pub fn blocked(&self) -> &[ProcessId] {
        match self {
            SafetyOutcome::Safe { .. } => &[],
            SafetyOutcome::Deadlocked { blocked, .. } => blocked,
        }
    }
}

/// Mutable bookkeeping for one pass of the check.
struct Run<'a> {
    state: &'a SystemState,
    available: Vec<u64>,
    finished: Vec<bool>,
    sequence: Vec<ProcessId>,
}

impl<'a> Run<'a> {
    fn new(state: &'a SystemState) -> Self {
        Self {
            state,
            available: state.available().to_vec(),
            finished: vec![false; state.process_count()],
            sequence: Vec::with_capacity(state.process_count()),
        }
    }

    fn done(&self) -> bool {
        self.sequence.len() == self.finished.len()
    }

    /// Try process `i`; on success release its allocation back into `available`.
    fn try_finish(&mut self, i: usize) -> bool {
        if self.finished[i] {
            return false;
        }
        let state = self.state;
        let process = &state.processes()[i];
        if !process.fits(&self.available) {
            return false;
        }
        for (a, held) in self.available.iter_mut().zip(&process.allocated) {
            *a += held;
        }
        self.finished[i] = true;
        self.sequence.push(ProcessId(i));
        log::debug!("{} can finish, available now {:?}", ProcessId(i), self.available);
        true
    }

    /// One forward sweep over the whole table.
    fn sweep(&mut self) -> bool {
        let mut progressed = false;
        for i in 0..self.finished.len() {
            progressed |= self.try_finish(i);
        }
        progressed
    }

    /// Finish the lowest-indexed process that fits, if any.
    fn first_fit(&mut self) -> bool {
        (0..self.finished.len()).any(|i| self.try_finish(i))
    }

    fn into_outcome(self, deadlocked: bool) -> SafetyOutcome {
        if !deadlocked {
            return SafetyOutcome::Safe { sequence: self.sequence };
        }
        let blocked = self
            .finished
            .iter()
            .enumerate()
            .filter(|(_, f)| !**f)
            .map(|(i, _)| ProcessId(i))
            .collect();
        SafetyOutcome::Deadlocked {
            completed: self.sequence,
            blocked,
        }
    }
}

/// Banker's algorithm safety check over a fixed allocation snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafetyChecker {
    pub scan_order: ScanOrder,
}

impl SafetyChecker {
    pub fn new(scan_order: ScanOrder) -> Self {
        Self { scan_order }
    }

    /// Decide whether `state` is safe. Deterministic: ties always go to the lower index.
    pub fn check(&self, state: &SystemState) -> SafetyOutcome {
        let mut run = Run::new(state);
        let mut round = 0usize;
        while !run.done() {
            round += 1;
            let progressed = match self.scan_order {
                ScanOrder::Continue => run.sweep(),
                ScanOrder::Restart => run.first_fit(),
            };
            log::debug!("round {round}: {} of {} finished", run.sequence.len(), run.finished.len());
            if !progressed {
                let outcome = run.into_outcome(true);
                log::warn!(
                    "deadlock after {round} rounds, blocked: {:?}",
                    outcome.blocked()
                );
                return outcome;
            }
        }
        log::info!("state is safe, {} processes scheduled", run.sequence.len());
        run.into_outcome(false)
    }
}
