//! Schedule quality metrics (KPIs).
//!
//! Computes standard performance indicators from a finished schedule and
//! its input jobs.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Avg Utilization | Mean machine busyness over the makespan horizon |
//! | Avg Flow Time | Mean job completion time (epoch-relative) |
//! | Total Setup Time | Sum of setup portions across all items |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::HashMap;

use crate::models::{Job, ScheduleResult};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Makespan: latest completion time.
    pub makespan: f64,
    /// Average machine utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-machine utilization.
    pub utilization_by_machine: HashMap<String, f64>,
    /// Average flow time: mean job completion time relative to the epoch.
    pub avg_flow_time: f64,
    /// Total setup time spent across all items.
    pub total_setup_time: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input jobs.
    pub fn calculate(result: &ScheduleResult, jobs: &[Job]) -> Self {
        let mut total_flow_time = 0.0;
        let mut counted_jobs = 0usize;

        for job in jobs {
            if let Some(completion) = result.completion_time(&job.job_id) {
                counted_jobs += 1;
                total_flow_time += completion;
            }
        }

        let utilization_by_machine = result.all_utilizations();
        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_machine.values().sum();
            sum / utilization_by_machine.len() as f64
        };

        let avg_flow_time = if counted_jobs == 0 {
            0.0
        } else {
            total_flow_time / counted_jobs as f64
        };

        let total_setup_time = result.items.iter().map(|i| i.setup_time).sum();

        Self {
            makespan: result.makespan,
            avg_utilization,
            utilization_by_machine,
            avg_flow_time,
            total_setup_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Machine, Operation};
    use crate::scheduler::GreedyScheduler;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_kpi_single_machine() {
        let jobs = vec![
            Job::new("A").with_operation(Operation::new("O1", "m1", 5.0)),
            Job::new("B").with_operation(Operation::new("O1", "m1", 3.0)),
        ];
        let machines = vec![Machine::new("m1")];
        let result = GreedyScheduler::new().schedule(&jobs, &machines).unwrap();

        let kpi = ScheduleKpi::calculate(&result, &jobs);
        assert_close(kpi.makespan, 8.0);
        // m1 is busy the whole horizon.
        assert_close(kpi.avg_utilization, 1.0);
        // B completes at 3, A at 8.
        assert_close(kpi.avg_flow_time, 5.5);
        assert_close(kpi.total_setup_time, 0.0);
    }

    #[test]
    fn test_kpi_setup_total() {
        let jobs = vec![Job::new("J1")
            .with_operation(Operation::new("O1", "M1", 3.0).with_setup_time(1.0))
            .with_operation(Operation::new("O2", "M2", 2.0).with_setup_time(0.5))];
        let machines = vec![Machine::new("M1"), Machine::new("M2")];
        let result = GreedyScheduler::new().schedule(&jobs, &machines).unwrap();

        let kpi = ScheduleKpi::calculate(&result, &jobs);
        assert_close(kpi.total_setup_time, 1.5);
    }

    #[test]
    fn test_kpi_utilization_by_machine() {
        let jobs = vec![
            Job::new("J1").with_operation(Operation::new("O1", "M1", 4.0)),
            Job::new("J2").with_operation(Operation::new("O1", "M2", 2.0)),
        ];
        let machines = vec![Machine::new("M1"), Machine::new("M2")];
        let result = GreedyScheduler::new().schedule(&jobs, &machines).unwrap();

        let kpi = ScheduleKpi::calculate(&result, &jobs);
        assert_close(kpi.makespan, 4.0);
        assert_close(kpi.utilization_by_machine["M1"], 1.0);
        assert_close(kpi.utilization_by_machine["M2"], 0.5);
        assert_close(kpi.avg_utilization, 0.75);
    }

    #[test]
    fn test_kpi_empty_schedule() {
        let result = GreedyScheduler::new().schedule(&[], &[]).unwrap();
        let kpi = ScheduleKpi::calculate(&result, &[]);
        assert_close(kpi.makespan, 0.0);
        assert_close(kpi.avg_utilization, 0.0);
        assert_close(kpi.avg_flow_time, 0.0);
        assert!(kpi.utilization_by_machine.is_empty());
    }
}
