//! Machine model.
//!
//! A machine is a single-capacity resource: it processes at most one
//! operation at a time, with no overlap.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A machine that operations are dispatched onto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Machine identifier, unique within a scheduling run.
    pub machine_id: String,
    /// Earliest instant the machine can begin any operation (default 0).
    #[serde(default)]
    pub available_from: f64,
    /// Opaque key-value metadata, carried through unchanged.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Machine {
    /// Creates a machine available from t = 0.
    pub fn new(machine_id: impl Into<String>) -> Self {
        Self {
            machine_id: machine_id.into(),
            available_from: 0.0,
            metadata: HashMap::new(),
        }
    }

    /// Sets the earliest availability.
    pub fn with_available_from(mut self, available_from: f64) -> Self {
        self.available_from = available_from;
        self
    }

    /// Adds a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
