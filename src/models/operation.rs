//! Operation model.
//!
//! An operation is the smallest schedulable unit of work: one processing
//! step on one machine, with a fixed duration and an optional setup time.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single operation in a job's routing.
///
/// Bound to exactly one machine. Operations within a job form a strict
/// precedence chain in sequence order; the chain itself lives on [`Job`].
///
/// [`Job`]: super::Job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation identifier, unique within the owning job.
    pub operation_id: String,
    /// The machine this operation must run on.
    pub machine_id: String,
    /// Processing time (must be strictly positive).
    pub duration: f64,
    /// Preparation time before processing (default 0).
    #[serde(default)]
    pub setup_time: f64,
    /// Opaque key-value metadata, carried through unchanged.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Operation {
    /// Creates an operation with no setup time.
    pub fn new(
        operation_id: impl Into<String>,
        machine_id: impl Into<String>,
        duration: f64,
    ) -> Self {
        Self {
            operation_id: operation_id.into(),
            machine_id: machine_id.into(),
            duration,
            setup_time: 0.0,
            metadata: HashMap::new(),
        }
    }

    /// Sets the setup time.
    pub fn with_setup_time(mut self, setup_time: f64) -> Self {
        self.setup_time = setup_time;
        self
    }

    /// Adds a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Total occupancy on the machine: duration + setup time.
    ///
    /// Computed, never stored, so it cannot drift from its inputs.
    #[inline]
    pub fn total_time(&self) -> f64 {
        self.duration + self.setup_time
    }
}
