//! Greedy dispatcher and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyScheduler` is an online, myopic list-scheduling heuristic: at each
//! decision point it dispatches the head-of-line operation that can begin
//! soonest, breaking ties by shortest total processing time, then by job id.
//! It does not backtrack or look ahead, so it is fast and deterministic but
//! not makespan-optimal.
//!
//! # KPI
//!
//! `ScheduleKpi` computes standard scheduling metrics from a finished
//! schedule: makespan, utilization, flow time, and setup overhead.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod greedy;
mod kpi;

pub use greedy::GreedyScheduler;
pub use kpi::ScheduleKpi;
