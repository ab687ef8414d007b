//! Greedy dispatcher for non-preemptive job-shop scheduling.
//!
//! Takes a set of jobs — each a strictly ordered sequence of operations, each
//! operation bound to one machine — and produces a feasible schedule together
//! with its makespan. Dispatching is a myopic list-scheduling heuristic:
//! earliest possible start first, shortest total processing time on ties, job
//! id as the final deterministic tie-break. It is fast and reproducible, not
//! optimal.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Operation`, `Job`, `Machine`,
//!   `ScheduleItem`, `ScheduleResult`
//! - **`validation`**: Input integrity checks (duplicate IDs, empty jobs,
//!   invalid durations and setup times)
//! - **`scheduler`**: The greedy dispatcher and schedule KPIs
//! - **`error`**: The error taxonomy for a scheduling call
//!
//! # Example
//!
//! ```
//! use jobshop_dispatch::models::{Job, Machine, Operation};
//! use jobshop_dispatch::scheduler::GreedyScheduler;
//!
//! let jobs = vec![
//!     Job::new("J1")
//!         .with_operation(Operation::new("O1", "M1", 5.0))
//!         .with_operation(Operation::new("O2", "M2", 3.0)),
//! ];
//! let machines = vec![Machine::new("M1"), Machine::new("M2")];
//!
//! let result = GreedyScheduler::new().schedule(&jobs, &machines).unwrap();
//! assert_eq!(result.item_count(), 2);
//! assert!((result.makespan - 8.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
