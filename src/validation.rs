//! Input validation for scheduling calls.
//!
//! Checks structural integrity of jobs and machines before any dispatch
//! decision. Detects:
//! - Duplicate job and machine IDs
//! - Duplicate operation IDs within a job
//! - Jobs with no operations
//! - Non-positive (or NaN) durations
//! - Negative (or NaN) setup times
//!
//! Unknown machine references are deliberately not checked here: they
//! surface during dispatch the first time the machine's readiness is
//! looked up, per the scheduler contract.

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::{Job, Machine};

/// Validates the input of a scheduling call.
///
/// Scans machines, then jobs, both in input order, and returns the first
/// violation found. Any violation fails the whole call — no partial
/// schedule is ever produced from invalid input.
pub fn validate_input(jobs: &[Job], machines: &[Machine]) -> Result<(), ScheduleError> {
    let mut machine_ids = HashSet::new();
    for machine in machines {
        if !machine_ids.insert(machine.machine_id.as_str()) {
            return Err(ScheduleError::DuplicateMachineId {
                machine_id: machine.machine_id.clone(),
            });
        }
    }

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.job_id.as_str()) {
            return Err(ScheduleError::DuplicateJobId {
                job_id: job.job_id.clone(),
            });
        }

        if !job.has_operations() {
            return Err(ScheduleError::EmptyJob {
                job_id: job.job_id.clone(),
            });
        }

        let mut operation_ids = HashSet::new();
        for operation in &job.operations {
            if !operation_ids.insert(operation.operation_id.as_str()) {
                return Err(ScheduleError::DuplicateOperationId {
                    job_id: job.job_id.clone(),
                    operation_id: operation.operation_id.clone(),
                });
            }

            // Negated comparisons so NaN fails both checks.
            if !(operation.duration > 0.0) {
                return Err(ScheduleError::InvalidDuration {
                    job_id: job.job_id.clone(),
                    operation_id: operation.operation_id.clone(),
                    duration: operation.duration,
                });
            }

            if !(operation.setup_time >= 0.0) {
                return Err(ScheduleError::NegativeSetupTime {
                    job_id: job.job_id.clone(),
                    operation_id: operation.operation_id.clone(),
                    setup_time: operation.setup_time,
                });
            }
        }
    }

    Ok(())
}
