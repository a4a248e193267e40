//! Operation log
//!
//! A capped diagnostic trail of mutations, stored under its own key. Logging
//! failures never fail the mutation that triggered them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most recent entries kept under the log key; older entries are dropped
pub const MAX_LOG_ENTRIES: usize = 500;

/// What a mutation did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Save,
    Update,
    Remove,
}

/// One entry in the diagnostic operation log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationLogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Storage key of the collection the operation touched
    pub collection: String,
    pub operation: Operation,
    pub record_id: String,
}

impl OperationLogEntry {
    pub fn new(collection: &str, operation: Operation, record_id: &str) -> Self {
        Self {
            id: crate::storage::store::generate_id("log"),
            timestamp: Utc::now(),
            collection: collection.to_string(),
            operation,
            record_id: record_id.to_string(),
        }
    }
}
