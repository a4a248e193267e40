//! CeoDesk data layer
//!
//! Local persistence for the CeoDesk business dashboard: typed record
//! collections stored as JSON blobs in a pluggable key-value backend.

pub mod storage;
pub mod types;

pub use storage::{DataStore, FileStore, MemoryStore, StorageError};
