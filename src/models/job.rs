//! Job model.
//!
//! A job is an ordered sequence of operations: the operation at position
//! *i* cannot start before the operation at position *i − 1* finishes on
//! its own machine.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Operation;

/// A job to be scheduled.
///
/// Immutable once constructed; edits produce a new value through the
/// builder methods rather than mutating a shared one. A job with zero
/// operations is invalid input and is rejected during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier, unique within a scheduling run.
    pub job_id: String,
    /// Operations in strict precedence order.
    pub operations: Vec<Operation>,
    /// Opaque key-value metadata, carried through unchanged.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Job {
    /// Creates a job with no operations.
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            operations: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Appends an operation to the routing.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Adds a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Whether this job has any operations.
    pub fn has_operations(&self) -> bool {
        !self.operations.is_empty()
    }

    /// Number of operations.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Total machine occupancy across all operations (duration + setup).
    pub fn total_work(&self) -> f64 {
        self.operations.iter().map(Operation::total_time).sum()
    }
}
