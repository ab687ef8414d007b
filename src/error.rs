//! Error taxonomy for scheduling calls.
//!
//! Every error aborts the whole `schedule` call — there is no partial
//! schedule and no recoverable-vs-fatal distinction. Each variant carries
//! enough identifying information to locate the offending input.

use thiserror::Error;

/// Errors surfaced by [`GreedyScheduler::schedule`].
///
/// [`GreedyScheduler::schedule`]: crate::scheduler::GreedyScheduler::schedule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A supplied job has no operations.
    #[error("job '{job_id}' has no operations to schedule")]
    EmptyJob {
        /// The offending job.
        job_id: String,
    },

    /// An operation's duration is not strictly positive (or is NaN).
    #[error("operation '{operation_id}' in job '{job_id}' must have a positive duration (got {duration})")]
    InvalidDuration {
        /// The owning job.
        job_id: String,
        /// The offending operation.
        operation_id: String,
        /// The rejected duration value.
        duration: f64,
    },

    /// An operation's setup time is negative (or NaN).
    #[error("operation '{operation_id}' in job '{job_id}' must have a non-negative setup time (got {setup_time})")]
    NegativeSetupTime {
        /// The owning job.
        job_id: String,
        /// The offending operation.
        operation_id: String,
        /// The rejected setup time value.
        setup_time: f64,
    },

    /// An operation references a machine absent from the supplied machine set.
    ///
    /// Detected during dispatch, the first time the machine's readiness is
    /// looked up. Never silently defaulted to time 0.
    #[error("operation '{operation_id}' in job '{job_id}' references unknown machine '{machine_id}'")]
    UnknownMachine {
        /// The owning job.
        job_id: String,
        /// The referencing operation.
        operation_id: String,
        /// The machine id that could not be resolved.
        machine_id: String,
    },

    /// Two supplied jobs share the same id.
    #[error("duplicate job id '{job_id}'")]
    DuplicateJobId {
        /// The duplicated id.
        job_id: String,
    },

    /// Two supplied machines share the same id.
    #[error("duplicate machine id '{machine_id}'")]
    DuplicateMachineId {
        /// The duplicated id.
        machine_id: String,
    },

    /// Two operations within one job share the same id.
    #[error("duplicate operation id '{operation_id}' in job '{job_id}'")]
    DuplicateOperationId {
        /// The owning job.
        job_id: String,
        /// The duplicated id.
        operation_id: String,
    },
}
