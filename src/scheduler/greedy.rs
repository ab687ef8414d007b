//! Greedy list-scheduling dispatcher.
//!
//! # Algorithm
//!
//! 1. Validate the full input (no partial schedules from bad input).
//! 2. Track per-job readiness and a cursor into each job's routing, and
//!    per-machine readiness seeded from `available_from`.
//! 3. Each round, the candidate set is the head-of-line operation of every
//!    unfinished job. Dispatch the candidate minimizing, lexicographically:
//!    earliest possible start, then total processing time, then job id.
//! 4. Commit the placement, advance the job's cursor, repeat until every
//!    operation is scheduled.
//!
//! The selection never inserts an operation before an earlier-ready one,
//! even when that would reduce idle time elsewhere. That myopia is the
//! defining property of the heuristic, not an accident.
//!
//! # Complexity
//! O(operations × jobs): one candidate scan per dispatched operation.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::collections::HashMap;

use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{Job, Machine, Operation, ScheduleItem, ScheduleResult};
use crate::validation::validate_input;

/// A dispatchable operation: the head of one job's remaining routing.
struct Candidate<'a> {
    job_index: usize,
    job_id: &'a str,
    operation: &'a Operation,
    earliest_start: f64,
}

/// Greedy job-shop dispatcher.
///
/// Pure computation: holds no state between calls, never mutates its
/// inputs, and yields bit-identical output for identical input.
///
/// # Example
///
/// ```
/// use jobshop_dispatch::models::{Job, Machine, Operation};
/// use jobshop_dispatch::scheduler::GreedyScheduler;
///
/// let jobs = vec![
///     Job::new("A").with_operation(Operation::new("O1", "m1", 5.0)),
///     Job::new("B").with_operation(Operation::new("O1", "m1", 3.0)),
/// ];
/// let machines = vec![Machine::new("m1")];
///
/// let result = GreedyScheduler::new().schedule(&jobs, &machines).unwrap();
/// // Equal earliest starts, so the shorter job dispatches first.
/// assert_eq!(result.items[0].job_id, "B");
/// assert!((result.makespan - 8.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Computes a feasible schedule for `jobs` on `machines`.
    ///
    /// Emits exactly one [`ScheduleItem`] per input operation, in dispatch
    /// order. Zero jobs is a defined success case with an empty item list
    /// and a makespan of 0.0.
    ///
    /// # Errors
    ///
    /// Any [`ScheduleError`] aborts the whole call: validation failures
    /// before the first dispatch decision, an unknown machine reference at
    /// its first readiness lookup.
    pub fn schedule(
        &self,
        jobs: &[Job],
        machines: &[Machine],
    ) -> Result<ScheduleResult, ScheduleError> {
        validate_input(jobs, machines)?;

        let mut machine_ready: HashMap<&str, f64> = machines
            .iter()
            .map(|m| (m.machine_id.as_str(), m.available_from))
            .collect();
        let mut job_ready = vec![0.0_f64; jobs.len()];
        let mut cursors = vec![0_usize; jobs.len()];

        let total_operations: usize = jobs.iter().map(Job::operation_count).sum();
        let mut items = Vec::with_capacity(total_operations);

        debug!(
            jobs = jobs.len(),
            machines = machines.len(),
            operations = total_operations,
            "starting greedy dispatch"
        );

        loop {
            let candidates =
                Self::collect_candidates(jobs, &cursors, &job_ready, &machine_ready)?;
            let Some(chosen) = Self::select_next(candidates) else {
                break;
            };

            let operation = chosen.operation;
            let start_time = chosen.earliest_start;
            let end_time = start_time + operation.total_time();

            debug!(
                job = %chosen.job_id,
                operation = %operation.operation_id,
                machine = %operation.machine_id,
                start = start_time,
                end = end_time,
                "dispatched operation"
            );

            items.push(
                ScheduleItem::new(
                    chosen.job_id,
                    &operation.operation_id,
                    &operation.machine_id,
                    start_time,
                    end_time,
                )
                .with_setup(operation.setup_time),
            );

            job_ready[chosen.job_index] = end_time;
            machine_ready.insert(operation.machine_id.as_str(), end_time);
            cursors[chosen.job_index] += 1;
        }

        Ok(ScheduleResult::from_items(items))
    }

    /// Collects the head-of-line operation of every unfinished job.
    ///
    /// Only the operation at each job's cursor is ever eligible — jobs
    /// enforce strict in-order dispatch. Fails on the first operation whose
    /// machine id cannot be resolved.
    fn collect_candidates<'a>(
        jobs: &'a [Job],
        cursors: &[usize],
        job_ready: &[f64],
        machine_ready: &HashMap<&str, f64>,
    ) -> Result<Vec<Candidate<'a>>, ScheduleError> {
        let mut candidates = Vec::new();
        for (job_index, job) in jobs.iter().enumerate() {
            let Some(operation) = job.operations.get(cursors[job_index]) else {
                continue;
            };

            let machine_free = *machine_ready
                .get(operation.machine_id.as_str())
                .ok_or_else(|| ScheduleError::UnknownMachine {
                    job_id: job.job_id.clone(),
                    operation_id: operation.operation_id.clone(),
                    machine_id: operation.machine_id.clone(),
                })?;

            candidates.push(Candidate {
                job_index,
                job_id: &job.job_id,
                operation,
                earliest_start: job_ready[job_index].max(machine_free),
            });
        }
        Ok(candidates)
    }

    /// Picks the next candidate to dispatch.
    ///
    /// Lexicographic key: earliest start ascending, total processing time
    /// ascending, job id ascending. The key is total (job ids are unique),
    /// which is what makes the schedule reproducible.
    fn select_next(candidates: Vec<Candidate<'_>>) -> Option<Candidate<'_>> {
        candidates.into_iter().min_by(|a, b| {
            a.earliest_start
                .total_cmp(&b.earliest_start)
                .then_with(|| {
                    a.operation
                        .total_time()
                        .total_cmp(&b.operation.total_time())
                })
                .then_with(|| a.job_id.cmp(b.job_id))
        })
    }
}
