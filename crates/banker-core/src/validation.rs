//! Input validation layer for allocation states.

use crate::domain::ProcessId;
use crate::error::{BankerError, Result};

/// Reject process counts beyond the configured table capacity.
pub fn validate_capacity(requested: usize, capacity: usize) -> Result<()> {
    if requested > capacity {
        return Err(BankerError::CapacityExceeded { requested, capacity });
    }
    Ok(())
}

/// Every matrix row and the available vector must be exactly `resource_count` wide,
/// and both matrices must describe the same number of processes.
pub fn validate_shape(
    resource_count: usize,
    max: &[Vec<u64>],
    allocated: &[Vec<u64>],
    available: &[u64],
) -> Result<()> {
    if resource_count == 0 {
        return Err(BankerError::InvalidInput("resource count must be at least 1".into()));
    }
    if max.len() != allocated.len() {
        return Err(BankerError::InvalidInput(format!(
            "maximum matrix has {} rows but allocated matrix has {}",
            max.len(),
            allocated.len()
        )));
    }
    for (name, rows) in [("maximum", max), ("allocated", allocated)] {
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != resource_count) {
            return Err(BankerError::InvalidInput(format!(
                "{name} row for {} has {} values, expected {resource_count}",
                ProcessId(i),
                row.len()
            )));
        }
    }
    if available.len() != resource_count {
        return Err(BankerError::InvalidInput(format!(
            "available vector has {} values, expected {resource_count}",
            available.len()
        )));
    }
    Ok(())
}

/// Free plus held units must fit in a `u64` per resource type; every sum the
/// checker or replay forms while releasing allocations is bounded by this total.
pub fn validate_totals(allocated: &[Vec<u64>], available: &[u64]) -> Result<()> {
    for (resource, &free) in available.iter().enumerate() {
        allocated
            .iter()
            .try_fold(free, |total, row| total.checked_add(row[resource]))
            .ok_or_else(|| {
                BankerError::InvalidInput(format!(
                    "total units of resource {resource} exceed {}",
                    u64::MAX
                ))
            })?;
    }
    Ok(())
}

/// A process may not hold more than it declared as its maximum.
pub fn validate_demand(process: ProcessId, max: &[u64], allocated: &[u64]) -> Result<()> {
    match max.iter().zip(allocated).position(|(m, a)| m < a) {
        Some(resource) => Err(BankerError::InconsistentDemand {
            process,
            resource,
            max: max[resource],
            allocated: allocated[resource],
        }),
        None => Ok(()),
    }
}
