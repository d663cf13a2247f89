use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation;

/// Index of a process in the order it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(pub usize);

impl ProcessId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Demand record for one process. `need` is derived once and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub max: Vec<u64>,
    pub allocated: Vec<u64>,
    need: Vec<u64>,
}

impl Process {
    /// Build a process record. Callers must have validated `max >= allocated`
    /// element-wise; see [`validation::validate_demand`].
    pub(crate) fn derive(max: Vec<u64>, allocated: Vec<u64>) -> Self {
        let need = max
            .iter()
            .zip(&allocated)
            .map(|(m, a)| m - a)
            .collect();
        Self { max, allocated, need }
    }

    pub fn need(&self) -> &[u64] {
        &self.need
    }

    /// True when every remaining need fits in `available`.
    pub fn fits(&self, available: &[u64]) -> bool {
        self.need.iter().zip(available).all(|(n, a)| a >= n)
    }
}

/// A complete allocation snapshot: every process plus the free resource vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemState {
    resource_count: usize,
    processes: Vec<Process>,
    available: Vec<u64>,
}

impl SystemState {
    /// Validate and assemble a state from row-major matrices.
    ///
    /// The process table is not checked against a capacity here; callers that
    /// enforce `BankerConfig::max_processes` do so with
    /// [`validation::validate_capacity`], as [`crate::input::read_state`] does.
    pub fn new(
        resource_count: usize,
        max: Vec<Vec<u64>>,
        allocated: Vec<Vec<u64>>,
        available: Vec<u64>,
    ) -> Result<Self> {
        validation::validate_shape(resource_count, &max, &allocated, &available)?;
        validation::validate_totals(&allocated, &available)?;
        let processes = max
            .into_iter()
            .zip(allocated)
            .enumerate()
            .map(|(i, (m, a))| {
                validation::validate_demand(ProcessId(i), &m, &a)?;
                Ok(Process::derive(m, a))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            resource_count,
            processes,
            available,
        })
    }

    pub fn resource_count(&self) -> usize {
        self.resource_count
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(id.index())
    }

    pub fn available(&self) -> &[u64] {
        &self.available
    }

    /// Units that are either free or held by a process. Conserved across a check.
    pub fn total_units(&self) -> Vec<u64> {
        let mut total = self.available.clone();
        for p in &self.processes {
            for (t, a) in total.iter_mut().zip(&p.allocated) {
                *t += a;
            }
        }
        total
    }

    /// Stable blake3 digest over the canonical little-endian encoding of the state.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.resource_count as u64).to_le_bytes());
        hasher.update(&(self.processes.len() as u64).to_le_bytes());
        for p in &self.processes {
            for v in p.max.iter().chain(&p.allocated) {
                hasher.update(&v.to_le_bytes());
            }
        }
        for v in &self.available {
            hasher.update(&v.to_le_bytes());
        }
        hex::encode(hasher.finalize().as_bytes())
    }
}
