//! Schedule (solution) model.
//!
//! A schedule is the computed placement of every operation on its machine.
//! Items are produced exclusively by the scheduler and never mutated
//! afterward; callers only read them.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The computed placement of one operation on its machine.
///
/// Invariant: `end_time - start_time == duration + setup_time` of the
/// source operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Owning job id.
    pub job_id: String,
    /// Scheduled operation id.
    pub operation_id: String,
    /// Machine the operation occupies.
    pub machine_id: String,
    /// Start of occupancy (setup included).
    pub start_time: f64,
    /// End of occupancy.
    pub end_time: f64,
    /// Setup time portion, occupying `[start_time, start_time + setup_time)`.
    pub setup_time: f64,
}

impl ScheduleItem {
    pub(crate) fn new(
        job_id: impl Into<String>,
        operation_id: impl Into<String>,
        machine_id: impl Into<String>,
        start_time: f64,
        end_time: f64,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            operation_id: operation_id.into(),
            machine_id: machine_id.into(),
            start_time,
            end_time,
            setup_time: 0.0,
        }
    }

    pub(crate) fn with_setup(mut self, setup_time: f64) -> Self {
        self.setup_time = setup_time;
        self
    }

    /// Total machine occupancy (end − start).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Processing time excluding setup.
    #[inline]
    pub fn process_time(&self) -> f64 {
        self.duration() - self.setup_time
    }
}

/// A complete schedule: items in dispatch order plus the makespan.
///
/// Dispatch order is the order decisions were committed, not necessarily
/// start-time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Scheduled items, one per input operation, in dispatch order.
    pub items: Vec<ScheduleItem>,
    /// Latest end time across all items (0.0 when there are none).
    pub makespan: f64,
}

impl ScheduleResult {
    /// Builds a result from dispatched items, computing the makespan.
    pub(crate) fn from_items(items: Vec<ScheduleItem>) -> Self {
        let makespan = items.iter().map(|i| i.end_time).fold(0.0, f64::max);
        Self { items, makespan }
    }

    /// Number of scheduled items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the schedule holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the item for an operation within a job.
    ///
    /// Operation ids are only unique within their owning job, so the lookup
    /// is keyed by both.
    pub fn item_for(&self, job_id: &str, operation_id: &str) -> Option<&ScheduleItem> {
        self.items
            .iter()
            .find(|i| i.job_id == job_id && i.operation_id == operation_id)
    }

    /// Returns all items for a given job, in dispatch order.
    pub fn items_for_job(&self, job_id: &str) -> Vec<&ScheduleItem> {
        self.items.iter().filter(|i| i.job_id == job_id).collect()
    }

    /// Returns all items placed on a given machine, in dispatch order.
    pub fn items_for_machine(&self, machine_id: &str) -> Vec<&ScheduleItem> {
        self.items
            .iter()
            .filter(|i| i.machine_id == machine_id)
            .collect()
    }

    /// Completion time for a job (latest end of its items).
    pub fn completion_time(&self, job_id: &str) -> Option<f64> {
        self.items
            .iter()
            .filter(|i| i.job_id == job_id)
            .map(|i| i.end_time)
            .reduce(f64::max)
    }

    /// Machine utilization: busy time over the makespan horizon.
    ///
    /// Returns `None` when the makespan is zero.
    pub fn machine_utilization(&self, machine_id: &str) -> Option<f64> {
        if self.makespan <= 0.0 {
            return None;
        }
        let busy: f64 = self
            .items_for_machine(machine_id)
            .iter()
            .map(|i| i.duration())
            .sum();
        Some(busy / self.makespan)
    }

    /// Utilization for every machine that has at least one item.
    pub fn all_utilizations(&self) -> HashMap<String, f64> {
        if self.makespan <= 0.0 {
            return HashMap::new();
        }

        let mut machine_busy: HashMap<String, f64> = HashMap::new();
        for item in &self.items {
            *machine_busy.entry(item.machine_id.clone()).or_insert(0.0) += item.duration();
        }

        machine_busy
            .into_iter()
            .map(|(id, busy)| (id, busy / self.makespan))
            .collect()
    }
}
